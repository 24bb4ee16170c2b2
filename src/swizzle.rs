//! Swizzles: projections of a vector onto a selection of its components.
//!
//! Every vector type gets generated named accessors (`v.zyx()`,
//! `v.yx_mut()`, ...) for each component family. Selections that repeat a
//! component only get a read accessor, so assigning through them is rejected
//! at compile time. For names only known at run time, [`SwizzlePattern`]
//! performs the same validation and reports violations as [`VectorError`]s.

use crate::{
    error::{SwizzleNameIssue, VectorError},
    vector::{Double2, Double3, Double4, Vector},
};
use impact_shader_vector_macros::impl_swizzles;
use std::fmt::{self, Write};
use tinyvec::ArrayVec;

/// The maximum number of components a swizzle can select.
pub const MAX_SWIZZLE_LEN: usize = 4;

/// A naming scheme for vector components. All families resolve to the same
/// underlying indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComponentFamily {
    /// `x`, `y`, `z`, `w`.
    Position,
    /// `r`, `g`, `b`, `a`.
    Color,
    /// `X`, `Y`, `Z`, `W`.
    PositionUpper,
    /// `R`, `G`, `B`, `A`.
    ColorUpper,
}

/// An assignable view of a selection of pairwise distinct components of a
/// vector.
///
/// Writing through the view scatters the given components back to the
/// selected positions, in the order of the selection.
#[derive(Debug)]
pub struct SwizzleMut<'a, const N: usize, const K: usize> {
    target: &'a mut Vector<N>,
    indices: [usize; K],
}

/// A validated swizzle name, such as `zyx` or `rgb`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SwizzlePattern {
    family: ComponentFamily,
    indices: ArrayVec<[usize; MAX_SWIZZLE_LEN]>,
}

/// The result of reading a swizzle whose length is only known at run time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Swizzled {
    Scalar(f64),
    Vector2(Double2),
    Vector3(Double3),
    Vector4(Double4),
}

impl ComponentFamily {
    pub const ALL: [Self; 4] = [
        Self::Position,
        Self::Color,
        Self::PositionUpper,
        Self::ColorUpper,
    ];

    /// The component names of this family, in index order.
    pub const fn names(self) -> [char; MAX_SWIZZLE_LEN] {
        match self {
            Self::Position => ['x', 'y', 'z', 'w'],
            Self::Color => ['r', 'g', 'b', 'a'],
            Self::PositionUpper => ['X', 'Y', 'Z', 'W'],
            Self::ColorUpper => ['R', 'G', 'B', 'A'],
        }
    }

    /// The name of the component with the given index in this family.
    ///
    /// # Panics
    /// If `index` is not below [`MAX_SWIZZLE_LEN`].
    pub const fn name(self, index: usize) -> char {
        self.names()[index]
    }

    /// Finds the family and index of the given component name.
    pub fn classify(name: char) -> Option<(Self, usize)> {
        Self::ALL.into_iter().find_map(|family| {
            family
                .names()
                .iter()
                .position(|&candidate| candidate == name)
                .map(|index| (family, index))
        })
    }
}

impl<const N: usize> Vector<N> {
    /// Returns the components at the given indices, in that order, as a new
    /// vector. Indices may repeat.
    ///
    /// # Panics
    /// If any index is not below `N`.
    #[inline]
    pub fn swizzle<const K: usize>(&self, indices: [usize; K]) -> Vector<K> {
        Vector::from_fn(|i| self[indices[i]])
    }

    /// Like [`Self::swizzle`], but fails instead of panicking.
    ///
    /// # Errors
    /// Returns [`VectorError::IndexOutOfRange`] if any index is not below `N`.
    pub fn try_swizzle<const K: usize>(&self, indices: [usize; K]) -> Result<Vector<K>, VectorError> {
        check_indices::<N>("try_swizzle", &indices)?;
        Ok(self.swizzle(indices))
    }

    /// Returns an assignable view of the components at the given indices.
    ///
    /// # Errors
    /// Returns [`VectorError::IndexOutOfRange`] if any index is not below `N`,
    /// or [`VectorError::ReadOnlySwizzle`] if an index repeats.
    pub fn swizzle_mut<const K: usize>(
        &mut self,
        indices: [usize; K],
    ) -> Result<SwizzleMut<'_, N, K>, VectorError> {
        check_indices::<N>("swizzle_mut", &indices)?;

        if !all_distinct(&indices) {
            let name = describe_indices(&indices);
            log::debug!("Rejected write through repeating swizzle `{name}` on {N}-component vector");
            return Err(VectorError::ReadOnlySwizzle { name, arity: N });
        }

        Ok(SwizzleMut::new_unchecked(self, indices))
    }

    /// Reads the swizzle described by the given pattern.
    ///
    /// # Errors
    /// Returns [`VectorError::InvalidSwizzle`] if the pattern selects a
    /// component this vector does not have.
    pub fn read_swizzle(&self, pattern: &SwizzlePattern) -> Result<Swizzled, VectorError> {
        pattern.check_arity(N)?;

        let indices = pattern.indices();
        Ok(match *indices {
            [i] => Swizzled::Scalar(self[i]),
            [i, j] => Swizzled::Vector2(self.swizzle([i, j])),
            [i, j, k] => Swizzled::Vector3(self.swizzle([i, j, k])),
            [i, j, k, l] => Swizzled::Vector4(self.swizzle([i, j, k, l])),
            _ => unreachable!("swizzle patterns select 1 to {MAX_SWIZZLE_LEN} components"),
        })
    }

    /// Assigns the given values to the components selected by the pattern,
    /// in the order of the selection. Either all values are written or,
    /// on error, none.
    ///
    /// # Errors
    /// Returns
    /// - [`VectorError::InvalidSwizzle`] if the pattern selects a component
    ///   this vector does not have.
    /// - [`VectorError::ReadOnlySwizzle`] if the pattern repeats a component.
    /// - [`VectorError::ComponentCountMismatch`] if the number of values
    ///   differs from the number of selected components.
    pub fn write_swizzle(
        &mut self,
        pattern: &SwizzlePattern,
        values: impl AsRef<[f64]>,
    ) -> Result<(), VectorError> {
        pattern.check_arity(N)?;

        if !pattern.is_writable() {
            log::debug!("Rejected write through repeating swizzle `{pattern}` on {N}-component vector");
            return Err(VectorError::ReadOnlySwizzle {
                name: pattern.to_string(),
                arity: N,
            });
        }

        let values = values.as_ref();
        if values.len() != pattern.component_count() {
            return Err(VectorError::ComponentCountMismatch {
                name: pattern.to_string(),
                expected: pattern.component_count(),
                found: values.len(),
            });
        }

        for (&index, &value) in pattern.indices().iter().zip(values) {
            self[index] = value;
        }
        Ok(())
    }

    /// Reads the swizzle with the given name, e.g. `"zyx"` or `"a"`.
    ///
    /// # Errors
    /// See [`SwizzlePattern::parse`].
    pub fn swizzle_by_name(&self, name: &str) -> Result<Swizzled, VectorError> {
        self.read_swizzle(&SwizzlePattern::parse(name, N)?)
    }

    /// Assigns through the swizzle with the given name, e.g. `"yx"`.
    ///
    /// # Errors
    /// See [`SwizzlePattern::parse`] and [`Self::write_swizzle`].
    pub fn assign_by_name(&mut self, name: &str, values: impl AsRef<[f64]>) -> Result<(), VectorError> {
        self.write_swizzle(&SwizzlePattern::parse(name, N)?, values)
    }
}

impl_swizzles!(2);
impl_swizzles!(3);
impl_swizzles!(4);

impl<'a, const N: usize, const K: usize> SwizzleMut<'a, N, K> {
    /// The caller must make sure that all indices are below `N` and
    /// pairwise distinct.
    #[inline]
    pub(crate) fn new_unchecked(target: &'a mut Vector<N>, indices: [usize; K]) -> Self {
        debug_assert!(indices.iter().all(|&index| index < N));
        debug_assert!(all_distinct(&indices));
        Self { target, indices }
    }

    /// The indices of the selected components in the target vector.
    #[inline]
    pub fn indices(&self) -> [usize; K] {
        self.indices
    }

    /// The current values of the selected components.
    #[inline]
    pub fn get(&self) -> Vector<K> {
        self.target.swizzle(self.indices)
    }

    /// Writes the given components to the selected positions.
    #[inline]
    pub fn set(&mut self, value: impl Into<Vector<K>>) {
        let value = value.into();
        for (&index, component) in self.indices.iter().zip(value.iter()) {
            self.target[index] = component;
        }
    }

    /// Replaces the selected components with the result of the given closure
    /// applied to their current values.
    #[inline]
    pub fn update(&mut self, f: impl FnOnce(Vector<K>) -> Vector<K>) {
        let value = f(self.get());
        self.set(value);
    }
}

macro_rules! impl_view_op_assign {
    ($op:ident, $method:ident, $binop:tt) => {
        impl<const N: usize, const K: usize> ::std::ops::$op<Vector<K>> for SwizzleMut<'_, N, K> {
            #[inline]
            fn $method(&mut self, rhs: Vector<K>) {
                self.update(|current| current $binop rhs);
            }
        }

        impl<const N: usize, const K: usize> ::std::ops::$op<f64> for SwizzleMut<'_, N, K> {
            #[inline]
            fn $method(&mut self, rhs: f64) {
                self.update(|current| current $binop rhs);
            }
        }
    };
}

impl_view_op_assign!(AddAssign, add_assign, +);
impl_view_op_assign!(SubAssign, sub_assign, -);
impl_view_op_assign!(MulAssign, mul_assign, *);
impl_view_op_assign!(DivAssign, div_assign, /);
impl_view_op_assign!(RemAssign, rem_assign, %);

impl SwizzlePattern {
    /// Parses a swizzle name for a vector with the given number of
    /// components.
    ///
    /// # Errors
    /// Returns [`VectorError::InvalidSwizzle`] if the name is empty, selects
    /// more than [`MAX_SWIZZLE_LEN`] components, contains something other
    /// than a component name, mixes component families or names a component
    /// the vector does not have.
    pub fn parse(name: &str, arity: usize) -> Result<Self, VectorError> {
        Self::parse_components(name, arity).map_err(|issue| {
            log::debug!("Rejected swizzle `{name}` on {arity}-component vector: {issue}");
            VectorError::InvalidSwizzle {
                name: name.to_owned(),
                arity,
                issue,
            }
        })
    }

    /// Creates a positional (`xyzw`) pattern selecting the given indices.
    ///
    /// # Errors
    /// Returns [`VectorError::InvalidSwizzle`] if no index or more than
    /// [`MAX_SWIZZLE_LEN`] indices are given, or
    /// [`VectorError::IndexOutOfRange`] if an index is not below `arity`.
    pub fn from_indices(indices: &[usize], arity: usize) -> Result<Self, VectorError> {
        let issue = match indices.len() {
            0 => Some(SwizzleNameIssue::Empty),
            len if len > MAX_SWIZZLE_LEN => Some(SwizzleNameIssue::TooLong(len)),
            _ => None,
        };
        if let Some(issue) = issue {
            return Err(VectorError::InvalidSwizzle {
                name: describe_indices(indices),
                arity,
                issue,
            });
        }

        let mut pattern_indices = ArrayVec::new();
        for &index in indices {
            if index >= arity.min(MAX_SWIZZLE_LEN) {
                return Err(VectorError::IndexOutOfRange {
                    operation: "SwizzlePattern::from_indices",
                    index,
                    arity,
                });
            }
            pattern_indices.push(index);
        }

        Ok(Self {
            family: ComponentFamily::Position,
            indices: pattern_indices,
        })
    }

    fn parse_components(name: &str, arity: usize) -> Result<Self, SwizzleNameIssue> {
        let len = name.chars().count();
        if len > MAX_SWIZZLE_LEN {
            return Err(SwizzleNameIssue::TooLong(len));
        }

        let first = name.chars().next().ok_or(SwizzleNameIssue::Empty)?;
        let (family, _) =
            ComponentFamily::classify(first).ok_or(SwizzleNameIssue::UnknownComponent(first))?;

        let mut indices = ArrayVec::new();
        for component in name.chars() {
            let (component_family, index) = ComponentFamily::classify(component)
                .ok_or(SwizzleNameIssue::UnknownComponent(component))?;

            if component_family != family {
                return Err(SwizzleNameIssue::MixedFamilies);
            }
            if index >= arity {
                return Err(SwizzleNameIssue::ComponentOutOfRange(component));
            }
            indices.push(index);
        }

        Ok(Self { family, indices })
    }

    /// The family the components are named from.
    #[inline]
    pub fn family(&self) -> ComponentFamily {
        self.family
    }

    /// The indices of the selected components, in selection order.
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// The number of selected components (1 to [`MAX_SWIZZLE_LEN`]).
    #[inline]
    pub fn component_count(&self) -> usize {
        self.indices.len()
    }

    /// Whether values can be assigned through this swizzle, which is the
    /// case when no component is selected more than once.
    #[inline]
    pub fn is_writable(&self) -> bool {
        all_distinct(&self.indices)
    }

    /// The same selection spelled with positional (`xyzw`) names.
    pub fn positional_name(&self) -> String {
        self.name_in(ComponentFamily::Position)
    }

    /// The same selection spelled with names from the given family.
    pub fn name_in(&self, family: ComponentFamily) -> String {
        self.indices.iter().map(|&index| family.name(index)).collect()
    }

    fn check_arity(&self, arity: usize) -> Result<(), VectorError> {
        match self.indices.iter().find(|&&index| index >= arity) {
            Some(&index) => Err(VectorError::InvalidSwizzle {
                name: self.to_string(),
                arity,
                issue: SwizzleNameIssue::ComponentOutOfRange(self.family.name(index)),
            }),
            None => Ok(()),
        }
    }
}

impl fmt::Display for SwizzlePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &index in self.indices.iter() {
            f.write_char(self.family.name(index))?;
        }
        Ok(())
    }
}

impl Swizzled {
    /// The number of components (1 for a scalar).
    pub fn component_count(&self) -> usize {
        self.as_slice().len()
    }

    /// The components as a slice.
    pub fn as_slice(&self) -> &[f64] {
        match self {
            Self::Scalar(value) => std::slice::from_ref(value),
            Self::Vector2(vector) => vector.as_slice(),
            Self::Vector3(vector) => vector.as_slice(),
            Self::Vector4(vector) => vector.as_slice(),
        }
    }

    /// The value if this is a single component.
    pub fn scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(value) => Some(*value),
            _ => None,
        }
    }
}

impl AsRef<[f64]> for Swizzled {
    fn as_ref(&self) -> &[f64] {
        self.as_slice()
    }
}

impl fmt::Display for Swizzled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(value) => fmt::Display::fmt(value, f),
            Self::Vector2(vector) => fmt::Display::fmt(vector, f),
            Self::Vector3(vector) => fmt::Display::fmt(vector, f),
            Self::Vector4(vector) => fmt::Display::fmt(vector, f),
        }
    }
}

fn check_indices<const N: usize>(operation: &'static str, indices: &[usize]) -> Result<(), VectorError> {
    match indices.iter().find(|&&index| index >= N) {
        Some(&index) => Err(VectorError::IndexOutOfRange {
            operation,
            index,
            arity: N,
        }),
        None => Ok(()),
    }
}

fn all_distinct(indices: &[usize]) -> bool {
    indices
        .iter()
        .enumerate()
        .all(|(i, index)| !indices[..i].contains(index))
}

/// Spells the indices with positional names when possible.
fn describe_indices(indices: &[usize]) -> String {
    if indices.iter().all(|&index| index < MAX_SWIZZLE_LEN) {
        indices
            .iter()
            .map(|&index| ComponentFamily::Position.name(index))
            .collect()
    } else {
        format!("{indices:?}")
    }
}
