//! Type and member surface of the vector family as seen by a shader
//! translation front end.
//!
//! A front end uses this to recognize vector type names, member accesses and
//! operators on vector values, and to find the shading-language spelling of
//! each. No code is generated here.

use crate::{
    error::{SwizzleNameIssue, VectorError},
    mask::BoolVector,
    swizzle::{ComponentFamily, SwizzlePattern},
    vector::Vector,
};
use std::fmt;

/// The scalar type of a vector's components.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Double,
    Bool,
}

/// Describes one of the vector types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VectorTypeInfo {
    /// The Rust type name, e.g. `Double3`.
    pub type_name: &'static str,
    /// The shading-language type name, e.g. `double3`.
    pub shader_name: &'static str,
    pub scalar: ScalarKind,
    pub arity: usize,
}

/// A vector type with a shading-language counterpart.
pub trait ShaderVector {
    const INFO: VectorTypeInfo;
}

/// The outcome of resolving a member access such as `v.zyx`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberAccess {
    pattern: SwizzlePattern,
    value_type: Option<VectorTypeInfo>,
}

/// The operators defined on vector values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VectorOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Neg,
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
}

impl ScalarKind {
    pub const fn shader_name(self) -> &'static str {
        match self {
            Self::Double => "double",
            Self::Bool => "bool",
        }
    }
}

impl VectorTypeInfo {
    pub const DOUBLE2: Self = Self::new("Double2", "double2", ScalarKind::Double, 2);
    pub const DOUBLE3: Self = Self::new("Double3", "double3", ScalarKind::Double, 3);
    pub const DOUBLE4: Self = Self::new("Double4", "double4", ScalarKind::Double, 4);
    pub const BOOL2: Self = Self::new("Bool2", "bool2", ScalarKind::Bool, 2);
    pub const BOOL3: Self = Self::new("Bool3", "bool3", ScalarKind::Bool, 3);
    pub const BOOL4: Self = Self::new("Bool4", "bool4", ScalarKind::Bool, 4);

    pub const ALL: [Self; 6] = [
        Self::DOUBLE2,
        Self::DOUBLE3,
        Self::DOUBLE4,
        Self::BOOL2,
        Self::BOOL3,
        Self::BOOL4,
    ];

    const fn new(
        type_name: &'static str,
        shader_name: &'static str,
        scalar: ScalarKind,
        arity: usize,
    ) -> Self {
        Self {
            type_name,
            shader_name,
            scalar,
            arity,
        }
    }

    /// Finds the vector type with the given arity and scalar kind.
    pub fn with_arity(scalar: ScalarKind, arity: usize) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|info| info.scalar == scalar && info.arity == arity)
    }

    /// Whether member accesses on this type are swizzles.
    pub fn is_swizzleable(&self) -> bool {
        self.scalar == ScalarKind::Double
    }
}

impl fmt::Display for VectorTypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name)
    }
}

macro_rules! impl_shader_vector {
    ($t:ty, $info:ident) => {
        impl ShaderVector for $t {
            const INFO: VectorTypeInfo = VectorTypeInfo::$info;
        }
    };
}

impl_shader_vector!(Vector<2>, DOUBLE2);
impl_shader_vector!(Vector<3>, DOUBLE3);
impl_shader_vector!(Vector<4>, DOUBLE4);
impl_shader_vector!(BoolVector<2>, BOOL2);
impl_shader_vector!(BoolVector<3>, BOOL3);
impl_shader_vector!(BoolVector<4>, BOOL4);

/// Finds the vector type with the given shading-language name, e.g.
/// `double3`.
pub fn lookup_shader_type(shader_name: &str) -> Option<VectorTypeInfo> {
    let info = VectorTypeInfo::ALL
        .into_iter()
        .find(|info| info.shader_name == shader_name);
    log::trace!("Looked up shader type `{shader_name}`: {info:?}");
    info
}

/// Finds the vector type with the given Rust name, e.g. `Double3`.
pub fn lookup_type_name(type_name: &str) -> Option<VectorTypeInfo> {
    let info = VectorTypeInfo::ALL
        .into_iter()
        .find(|info| info.type_name == type_name);
    log::trace!("Looked up vector type `{type_name}`: {info:?}");
    info
}

/// Resolves the member access `value.member` on a value of the given vector
/// type.
///
/// # Errors
/// Returns [`VectorError::InvalidSwizzle`] if the member is not a valid
/// swizzle of the type. Boolean vectors have no swizzles.
pub fn resolve_member(info: &VectorTypeInfo, member: &str) -> Result<MemberAccess, VectorError> {
    if !info.is_swizzleable() {
        log::debug!("Rejected member `{member}` on non-swizzleable type {info}");
        return Err(VectorError::InvalidSwizzle {
            name: member.to_owned(),
            arity: info.arity,
            issue: SwizzleNameIssue::NotSwizzleable,
        });
    }

    let pattern = SwizzlePattern::parse(member, info.arity)?;
    let value_type = match pattern.component_count() {
        1 => None,
        count => VectorTypeInfo::with_arity(info.scalar, count),
    };

    Ok(MemberAccess {
        pattern,
        value_type,
    })
}

impl MemberAccess {
    pub fn pattern(&self) -> &SwizzlePattern {
        &self.pattern
    }

    /// The vector type of the accessed value, or [`None`] if it is a scalar.
    pub fn value_type(&self) -> Option<VectorTypeInfo> {
        self.value_type
    }

    /// The shading-language name of the accessed value's type.
    pub fn shader_type_name(&self) -> &'static str {
        self.value_type
            .map_or(ScalarKind::Double.shader_name(), |info| info.shader_name)
    }

    /// Whether the member can be assigned to.
    pub fn is_writable(&self) -> bool {
        self.pattern.is_writable()
    }

    /// The member spelled the way the shading language accepts it. Uppercase
    /// component names are lowered to the corresponding lowercase family.
    pub fn shader_member(&self) -> String {
        let family = match self.pattern.family() {
            ComponentFamily::Position | ComponentFamily::PositionUpper => {
                ComponentFamily::Position
            }
            ComponentFamily::Color | ComponentFamily::ColorUpper => ComponentFamily::Color,
        };
        self.pattern.name_in(family)
    }
}

impl VectorOp {
    pub const ALL: [Self; 12] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Rem,
        Self::Neg,
        Self::Eq,
        Self::Ne,
        Self::Gt,
        Self::Ge,
        Self::Lt,
        Self::Le,
    ];

    /// The shading-language operator symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub | Self::Neg => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Lt => "<",
            Self::Le => "<=",
        }
    }

    /// The name of the Rust method or operator trait method implementing
    /// this operator on [`Vector`].
    pub const fn method_name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Rem => "rem",
            Self::Neg => "neg",
            Self::Eq => "cmpeq",
            Self::Ne => "cmpne",
            Self::Gt => "cmpgt",
            Self::Ge => "cmpge",
            Self::Lt => "cmplt",
            Self::Le => "cmple",
        }
    }

    pub const fn is_comparison(self) -> bool {
        matches!(
            self,
            Self::Eq | Self::Ne | Self::Gt | Self::Ge | Self::Lt | Self::Le
        )
    }

    pub const fn is_unary(self) -> bool {
        matches!(self, Self::Neg)
    }

    /// Finds the operator with the given symbol. `-` resolves to the binary
    /// or unary operator depending on `unary`.
    pub fn from_symbol(symbol: &str, unary: bool) -> Option<Self> {
        if unary {
            return (symbol == "-").then_some(Self::Neg);
        }
        Self::ALL
            .into_iter()
            .find(|op| !op.is_unary() && op.symbol() == symbol)
    }

    /// The type of the result of applying this operator to operands of the
    /// given type, or [`None`] if the operator is not defined for it.
    /// Comparisons yield the boolean vector of the same arity.
    pub fn result_type(self, operand: &VectorTypeInfo) -> Option<VectorTypeInfo> {
        if operand.scalar != ScalarKind::Double {
            return None;
        }
        if self.is_comparison() {
            VectorTypeInfo::with_arity(ScalarKind::Bool, operand.arity)
        } else {
            Some(*operand)
        }
    }
}

impl fmt::Display for VectorOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Bool3, Double2, Double3, Double4};

    #[test]
    fn concrete_types_report_their_info() {
        assert_eq!(Double2::INFO, VectorTypeInfo::DOUBLE2);
        assert_eq!(Double3::INFO.shader_name, "double3");
        assert_eq!(Double4::INFO.arity, 4);
        assert_eq!(Bool3::INFO, VectorTypeInfo::BOOL3);
        assert_eq!(<crate::Bool4 as ShaderVector>::INFO.scalar, ScalarKind::Bool);
    }

    #[test]
    fn looking_up_types_by_name_works() {
        assert_eq!(lookup_shader_type("double3"), Some(VectorTypeInfo::DOUBLE3));
        assert_eq!(lookup_shader_type("bool2"), Some(VectorTypeInfo::BOOL2));
        assert_eq!(lookup_shader_type("float3"), None);
        assert_eq!(lookup_type_name("Double4"), Some(VectorTypeInfo::DOUBLE4));
        assert_eq!(lookup_type_name("double4"), None);
    }

    #[test]
    fn resolving_swizzle_members_works() {
        let access = resolve_member(&VectorTypeInfo::DOUBLE3, "zyx").unwrap();
        assert_eq!(access.value_type(), Some(VectorTypeInfo::DOUBLE3));
        assert_eq!(access.shader_type_name(), "double3");
        assert!(access.is_writable());
        assert_eq!(access.pattern().indices(), &[2, 1, 0]);

        let access = resolve_member(&VectorTypeInfo::DOUBLE4, "a").unwrap();
        assert_eq!(access.value_type(), None);
        assert_eq!(access.shader_type_name(), "double");

        let access = resolve_member(&VectorTypeInfo::DOUBLE2, "xxxx").unwrap();
        assert_eq!(access.value_type(), Some(VectorTypeInfo::DOUBLE4));
        assert!(!access.is_writable());
    }

    #[test]
    fn uppercase_members_are_lowered_for_the_shader() {
        let access = resolve_member(&VectorTypeInfo::DOUBLE4, "WZ").unwrap();
        assert_eq!(access.shader_member(), "wz");
        let access = resolve_member(&VectorTypeInfo::DOUBLE3, "BGR").unwrap();
        assert_eq!(access.shader_member(), "bgr");
    }

    #[test]
    fn resolving_invalid_members_fails() {
        assert!(matches!(
            resolve_member(&VectorTypeInfo::DOUBLE2, "xz"),
            Err(VectorError::InvalidSwizzle {
                issue: SwizzleNameIssue::ComponentOutOfRange('z'),
                ..
            })
        ));
        assert!(matches!(
            resolve_member(&VectorTypeInfo::BOOL3, "x"),
            Err(VectorError::InvalidSwizzle {
                issue: SwizzleNameIssue::NotSwizzleable,
                ..
            })
        ));
    }

    #[test]
    fn operators_map_to_symbols_and_result_types() {
        assert_eq!(VectorOp::Rem.symbol(), "%");
        assert_eq!(VectorOp::Ge.to_string(), ">=");
        assert!(VectorOp::Lt.is_comparison());
        assert!(!VectorOp::Mul.is_comparison());
        assert_eq!(VectorOp::Gt.method_name(), "cmpgt");

        assert_eq!(
            VectorOp::Gt.result_type(&VectorTypeInfo::DOUBLE2),
            Some(VectorTypeInfo::BOOL2)
        );
        assert_eq!(
            VectorOp::Add.result_type(&VectorTypeInfo::DOUBLE4),
            Some(VectorTypeInfo::DOUBLE4)
        );
        assert_eq!(VectorOp::Add.result_type(&VectorTypeInfo::BOOL2), None);
    }

    #[test]
    fn operators_are_found_by_symbol() {
        assert_eq!(VectorOp::from_symbol("-", false), Some(VectorOp::Sub));
        assert_eq!(VectorOp::from_symbol("-", true), Some(VectorOp::Neg));
        assert_eq!(VectorOp::from_symbol("<=", false), Some(VectorOp::Le));
        assert_eq!(VectorOp::from_symbol("+", true), None);
        assert_eq!(VectorOp::from_symbol("&&", false), None);

        for op in VectorOp::ALL.into_iter().filter(|op| !op.is_unary()) {
            assert_eq!(VectorOp::from_symbol(op.symbol(), false), Some(op));
        }
    }
}
