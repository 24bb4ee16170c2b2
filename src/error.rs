//! Errors.

use thiserror::Error;

/// Errors produced by fallible vector operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum VectorError {
    #[error("component index {index} is out of range for `{operation}` on a {arity}-component vector")]
    IndexOutOfRange {
        operation: &'static str,
        index: usize,
        arity: usize,
    },

    #[error("invalid swizzle `{name}` on a {arity}-component vector: {issue}")]
    InvalidSwizzle {
        name: String,
        arity: usize,
        issue: SwizzleNameIssue,
    },

    #[error("cannot assign through swizzle `{name}` on a {arity}-component vector since it repeats a component")]
    ReadOnlySwizzle { name: String, arity: usize },

    #[error("swizzle `{name}` selects {expected} components but {found} values were given")]
    ComponentCountMismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("buffer of {capacity} bytes is too small for the {required} bytes of formatted output")]
    BufferTooSmall { capacity: usize, required: usize },
}

/// Why a swizzle name was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SwizzleNameIssue {
    #[error("the name is empty")]
    Empty,

    #[error("it selects {0} components but at most 4 are allowed")]
    TooLong(usize),

    #[error("`{0}` is not a component name")]
    UnknownComponent(char),

    #[error("it mixes component families")]
    MixedFamilies,

    #[error("component `{0}` does not exist on this vector")]
    ComponentOutOfRange(char),

    #[error("this type has no swizzles")]
    NotSwizzleable,
}
