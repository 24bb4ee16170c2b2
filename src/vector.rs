//! Vectors.

use crate::error::VectorError;
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use bytemuck::{Pod, Zeroable};
use num_traits::{One, Zero};
use std::ops::{Index, IndexMut};

/// A vector of `N` double-precision components, mirroring the shading-language
/// `doubleN` types.
///
/// The components are stored contiguously without padding, so the vector has
/// the size of `N` doubles and an alignment of 8 bytes. A [`Double3`]
/// occupies 24 bytes.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq)]
pub struct Vector<const N: usize>([f64; N]);

/// A 2-component double-precision vector (`double2`).
pub type Double2 = Vector<2>;

/// A 3-component double-precision vector (`double3`).
pub type Double3 = Vector<3>;

/// A 4-component double-precision vector (`double4`).
pub type Double4 = Vector<4>;

// SAFETY: `Vector<N>` is a transparent wrapper around `[f64; N]`, which has no
// padding and for which every bit pattern is valid.
unsafe impl<const N: usize> Zeroable for Vector<N> {}
unsafe impl<const N: usize> Pod for Vector<N> {}

impl<const N: usize> Vector<N> {
    /// The number of components.
    pub const ARITY: usize = N;

    /// Creates a new vector with the given components.
    #[inline]
    pub const fn from_array(components: [f64; N]) -> Self {
        Self(components)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f64) -> Self {
        Self([value; N])
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::same(0.0)
    }

    /// Creates a new vector with all ones.
    #[inline]
    pub const fn ones() -> Self {
        Self::same(1.0)
    }

    /// Creates a new vector whose component `i` is `f(i)`.
    #[inline]
    pub fn from_fn(f: impl FnMut(usize) -> f64) -> Self {
        Self(std::array::from_fn(f))
    }

    /// The components as an array reference.
    #[inline]
    pub const fn as_array(&self) -> &[f64; N] {
        &self.0
    }

    /// The components as an array.
    #[inline]
    pub const fn to_array(self) -> [f64; N] {
        self.0
    }

    /// The components as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Iterates over the components in index order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    /// Returns the component at the given index.
    ///
    /// # Errors
    /// Returns [`VectorError::IndexOutOfRange`] if `index` is not below `N`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<f64, VectorError> {
        self.0
            .get(index)
            .copied()
            .ok_or(VectorError::IndexOutOfRange {
                operation: "get",
                index,
                arity: N,
            })
    }

    /// Sets the component at the given index.
    ///
    /// # Errors
    /// Returns [`VectorError::IndexOutOfRange`] if `index` is not below `N`.
    /// The vector is left unchanged in that case.
    #[inline]
    pub fn set(&mut self, index: usize, value: f64) -> Result<(), VectorError> {
        let component = self.0.get_mut(index).ok_or(VectorError::IndexOutOfRange {
            operation: "set",
            index,
            arity: N,
        })?;
        *component = value;
        Ok(())
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(f64) -> f64) -> Self {
        Self::from_fn(|i| f(self.0[i]))
    }

    /// Returns a vector with the given closure applied to each pair of
    /// corresponding components in this and another vector.
    #[inline]
    pub fn zip_mapped(&self, other: &Self, mut f: impl FnMut(f64, f64) -> f64) -> Self {
        Self::from_fn(|i| f(self.0[i], other.0[i]))
    }
}

macro_rules! impl_new {
    ($n:literal, ($($component:ident),+), $tuple:ty) => {
        impl Vector<$n> {
            /// Creates a new vector with the given components.
            #[inline]
            pub const fn new($($component: f64),+) -> Self {
                Self([$($component),+])
            }
        }

        impl From<$tuple> for Vector<$n> {
            #[inline]
            fn from(($($component),+): $tuple) -> Self {
                Self::new($($component),+)
            }
        }
    };
}

impl_new!(2, (x, y), (f64, f64));
impl_new!(3, (x, y, z), (f64, f64, f64));
impl_new!(4, (x, y, z, w), (f64, f64, f64, f64));

impl Vector<2> {
    /// Converts the vector to 3D by appending the given third component.
    #[inline]
    pub const fn extended(&self, z: f64) -> Vector<3> {
        Vector::<3>::new(self.0[0], self.0[1], z)
    }
}

impl Vector<3> {
    /// Converts the vector to 4D by appending the given fourth component.
    #[inline]
    pub const fn extended(&self, w: f64) -> Vector<4> {
        Vector::<4>::new(self.0[0], self.0[1], self.0[2], w)
    }

    /// Converts the vector to 2D by dropping the third component.
    #[inline]
    pub const fn truncated(&self) -> Vector<2> {
        Vector::<2>::new(self.0[0], self.0[1])
    }
}

impl Vector<4> {
    /// Converts the vector to 3D by dropping the fourth component.
    #[inline]
    pub const fn truncated(&self) -> Vector<3> {
        Vector::<3>::new(self.0[0], self.0[1], self.0[2])
    }
}

impl<const N: usize> Default for Vector<N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const N: usize> From<[f64; N]> for Vector<N> {
    #[inline]
    fn from(components: [f64; N]) -> Self {
        Self(components)
    }
}

impl<const N: usize> From<Vector<N>> for [f64; N] {
    #[inline]
    fn from(vector: Vector<N>) -> Self {
        vector.0
    }
}

impl<const N: usize> From<f64> for Vector<N> {
    #[inline]
    fn from(value: f64) -> Self {
        Self::same(value)
    }
}

impl<const N: usize> AsRef<[f64]> for Vector<N> {
    #[inline]
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<const N: usize> IndexMut<usize> for Vector<N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<const N: usize> Zero for Vector<N> {
    fn zero() -> Self {
        Self::zeros()
    }

    fn is_zero(&self) -> bool {
        self.0.iter().all(Zero::is_zero)
    }
}

impl<const N: usize> One for Vector<N> {
    fn one() -> Self {
        Self::ones()
    }
}

impl_abs_diff_eq!([const N: usize], Vector<N>, |a, b, epsilon| {
    a.0.iter().zip(&b.0).all(|(x, y)| x.abs_diff_eq(y, epsilon))
});

impl_relative_eq!([const N: usize], Vector<N>, |a, b, epsilon, max_relative| {
    a.0.iter()
        .zip(&b.0)
        .all(|(x, y)| x.relative_eq(y, epsilon, max_relative))
});

impl_ulps_eq!([const N: usize], Vector<N>, |a, b, epsilon, max_ulps| {
    a.0.iter()
        .zip(&b.0)
        .all(|(x, y)| x.ulps_eq(y, epsilon, max_ulps))
});

#[cfg(feature = "serde")]
impl<const N: usize> serde::Serialize for Vector<N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeTuple;

        let mut tuple = serializer.serialize_tuple(N)?;
        for component in &self.0 {
            tuple.serialize_element(component)?;
        }
        tuple.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, const N: usize> serde::Deserialize<'de> for Vector<N> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_tuple(N, ComponentsVisitor::<N>)
    }
}

/// Reads exactly `N` components, rejecting shorter and longer sequences.
#[cfg(feature = "serde")]
struct ComponentsVisitor<const N: usize>;

#[cfg(feature = "serde")]
impl<'de, const N: usize> serde::de::Visitor<'de> for ComponentsVisitor<N> {
    type Value = Vector<N>;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "a sequence of {N} components")
    }

    fn visit_seq<A: serde::de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut components = [0.0; N];
        for (index, component) in components.iter_mut().enumerate() {
            *component = seq
                .next_element()?
                .ok_or_else(|| serde::de::Error::invalid_length(index, &self))?;
        }
        if seq.next_element::<serde::de::IgnoredAny>()?.is_some() {
            return Err(serde::de::Error::invalid_length(N + 1, &self));
        }
        Ok(Vector(components))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::mem;

    #[test]
    fn creating_vectors_with_explicit_components_works() {
        let v2 = Double2::new(1.0, 2.0);
        let v3 = Double3::new(1.0, 2.0, 3.0);
        let v4 = Double4::new(1.0, 2.0, 3.0, 4.0);

        assert_eq!(v2.to_array(), [1.0, 2.0]);
        assert_eq!(v3.to_array(), [1.0, 2.0, 3.0]);
        assert_eq!(v4.to_array(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn broadcasting_scalar_fills_every_component() {
        assert_eq!(Double2::same(5.0), Double2::new(5.0, 5.0));
        assert_eq!(Double3::same(5.0), Double3::new(5.0, 5.0, 5.0));
        assert_eq!(Double4::same(5.0), Double4::new(5.0, 5.0, 5.0, 5.0));
        assert_eq!(Double3::from(5.0), Double3::same(5.0));
    }

    #[test]
    fn default_vector_is_zero() {
        assert_eq!(Double4::default(), Double4::zeros());
        assert!(Double4::default().is_zero());
        assert_eq!(Double2::one(), Double2::new(1.0, 1.0));
    }

    #[test]
    fn converting_from_tuples_and_arrays_works() {
        assert_eq!(Double2::from((1.0, 2.0)), Double2::new(1.0, 2.0));
        assert_eq!(Double4::from([1.0, 2.0, 3.0, 4.0]), Double4::new(1.0, 2.0, 3.0, 4.0));
        let array: [f64; 3] = Double3::new(1.0, 2.0, 3.0).into();
        assert_eq!(array, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn getting_and_setting_components_in_range_works() {
        let mut v = Double3::new(1.0, 2.0, 3.0);
        assert_eq!(v.get(2), Ok(3.0));

        v.set(1, 20.0).unwrap();
        assert_eq!(v, Double3::new(1.0, 20.0, 3.0));
    }

    #[test]
    fn getting_component_out_of_range_fails() {
        let v = Double2::new(1.0, 2.0);
        assert_eq!(
            v.get(2),
            Err(VectorError::IndexOutOfRange {
                operation: "get",
                index: 2,
                arity: 2
            })
        );
    }

    #[test]
    fn setting_component_out_of_range_fails_without_modifying() {
        let mut v = Double4::new(1.0, 2.0, 3.0, 4.0);
        let err = v.set(4, 0.0).unwrap_err();
        assert!(matches!(
            err,
            VectorError::IndexOutOfRange {
                operation: "set",
                index: 4,
                arity: 4
            }
        ));
        assert_eq!(v, Double4::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn indexing_works() {
        let mut v = Double3::new(1.0, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[2], 3.0);

        v[1] = 20.0;
        assert_eq!(v, Double3::new(1.0, 20.0, 3.0));
    }

    #[test]
    #[should_panic]
    fn indexing_out_of_bounds_panics() {
        let v = Double3::new(1.0, 2.0, 3.0);
        let _ = v[3];
    }

    #[test]
    fn layout_is_packed_doubles() {
        assert_eq!(mem::size_of::<Double2>(), 16);
        assert_eq!(mem::size_of::<Double3>(), 24);
        assert_eq!(mem::size_of::<Double4>(), 32);
        assert_eq!(mem::align_of::<Double2>(), 8);
        assert_eq!(mem::align_of::<Double3>(), 8);
        assert_eq!(mem::align_of::<Double4>(), 8);
    }

    #[test]
    fn casting_slice_of_vectors_to_doubles_works() {
        let vectors = [Double3::new(1.0, 2.0, 3.0), Double3::new(4.0, 5.0, 6.0)];
        let doubles: &[f64] = bytemuck::cast_slice(&vectors[..]);
        assert_eq!(doubles, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn equality_follows_ieee_semantics() {
        assert_ne!(Double2::new(f64::NAN, 1.0), Double2::new(f64::NAN, 1.0));
        assert_eq!(Double2::new(0.0, 1.0), Double2::new(-0.0, 1.0));
        assert_ne!(Double2::new(0.0, 1.0), Double2::new(0.0, 1.5));
    }

    #[test]
    fn approximate_comparison_works() {
        let a = Double3::new(1.0, 2.0, 3.0);
        let b = Double3::new(1.0 + 1e-12, 2.0, 3.0 - 1e-12);
        assert_abs_diff_eq!(a, b, epsilon = 1e-9);
        assert!(!a.abs_diff_eq(&Double3::new(1.1, 2.0, 3.0), 1e-9));
    }

    #[test]
    fn extending_and_truncating_works() {
        let v2 = Double2::new(1.0, 2.0);
        let v4 = v2.extended(3.0).extended(4.0);
        assert_eq!(v4, Double4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(v4.truncated().truncated(), v2);
    }

    #[test]
    fn mapping_components_works() {
        let v = Double3::new(1.0, -2.0, 3.0);
        assert_eq!(v.mapped(|c| c * 2.0), Double3::new(2.0, -4.0, 6.0));
        assert_eq!(
            v.zip_mapped(&Double3::same(1.0), f64::max),
            Double3::new(1.0, 1.0, 3.0)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip_preserves_components() {
        let v = Double3::new(1.5, -2.0, 3.25);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[1.5,-2.0,3.25]");
        assert_eq!(serde_json::from_str::<Double3>(&json).unwrap(), v);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializing_wrong_number_of_components_fails() {
        assert!(serde_json::from_str::<Double3>("[1.0, 2.0]").is_err());
        assert!(serde_json::from_str::<Double2>("[1.0, 2.0, 3.0]").is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn binary_round_trip_preserves_components() {
        let v = Double3::new(1.5, -2.0, 3.25);
        let bytes = postcard::to_allocvec(&v).unwrap();
        assert_eq!(bytes.len(), 3 * mem::size_of::<f64>());
        assert_eq!(postcard::from_bytes::<Double3>(&bytes).unwrap(), v);

        let v = Double2::new(-0.5, 8.0);
        let bytes = postcard::to_allocvec(&v).unwrap();
        assert_eq!(postcard::from_bytes::<Double2>(&bytes).unwrap(), v);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn binary_input_with_missing_components_fails() {
        let bytes = postcard::to_allocvec(&Double2::new(1.0, 2.0)).unwrap();
        assert!(postcard::from_bytes::<Double3>(&bytes).is_err());
    }
}
