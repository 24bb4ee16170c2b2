//! Double-precision shader vectors.
//!
//! CPU-side counterparts of the shading-language `double2`, `double3` and
//! `double4` types, with swizzles, elementwise arithmetic, elementwise
//! comparisons yielding boolean vectors, and text formatting.

#[macro_use]
mod macros;

pub mod error;
pub mod format;
pub mod mask;
pub mod shader;
pub mod swizzle;
pub mod vector;

mod ops;

pub use error::{SwizzleNameIssue, VectorError};
pub use format::{FormattedVector, VectorFormat};
pub use mask::{Bool2, Bool3, Bool4, BoolVector};
pub use swizzle::{ComponentFamily, SwizzleMut, SwizzlePattern, Swizzled};
pub use vector::{Double2, Double3, Double4, Vector};
