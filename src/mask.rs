//! Boolean vectors produced by elementwise comparisons.

use crate::error::VectorError;
use std::ops::Index;

/// The result of an elementwise comparison of two `N`-component vectors,
/// mirroring the shading-language `boolN` types.
///
/// Boolean vectors are only obtained from comparisons such as
/// [`Vector::cmpgt`](crate::Vector::cmpgt).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoolVector<const N: usize>([bool; N]);

/// The result of comparing two [`Double2`](crate::Double2)s (`bool2`).
pub type Bool2 = BoolVector<2>;

/// The result of comparing two [`Double3`](crate::Double3)s (`bool3`).
pub type Bool3 = BoolVector<3>;

/// The result of comparing two [`Double4`](crate::Double4)s (`bool4`).
pub type Bool4 = BoolVector<4>;

impl<const N: usize> BoolVector<N> {
    /// The number of components.
    pub const ARITY: usize = N;

    #[inline]
    pub(crate) fn from_fn(f: impl FnMut(usize) -> bool) -> Self {
        Self(std::array::from_fn(f))
    }

    #[cfg(test)]
    pub(crate) const fn from_array(components: [bool; N]) -> Self {
        Self(components)
    }

    /// Whether any component is `true`.
    #[inline]
    pub fn any(&self) -> bool {
        self.0.iter().any(|&component| component)
    }

    /// Whether all components are `true`.
    #[inline]
    pub fn all(&self) -> bool {
        self.0.iter().all(|&component| component)
    }

    /// Whether no component is `true`.
    #[inline]
    pub fn none(&self) -> bool {
        !self.any()
    }

    /// The number of `true` components.
    #[inline]
    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&component| component).count()
    }

    /// Returns the component at the given index.
    ///
    /// # Errors
    /// Returns [`VectorError::IndexOutOfRange`] if `index` is not below `N`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<bool, VectorError> {
        self.0
            .get(index)
            .copied()
            .ok_or(VectorError::IndexOutOfRange {
                operation: "get",
                index,
                arity: N,
            })
    }

    /// The components as an array.
    #[inline]
    pub const fn to_array(self) -> [bool; N] {
        self.0
    }

    /// Iterates over the components in index order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = bool> + '_ {
        self.0.iter().copied()
    }
}

impl<const N: usize> Index<usize> for BoolVector<N> {
    type Output = bool;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<const N: usize> From<BoolVector<N>> for [bool; N] {
    #[inline]
    fn from(mask: BoolVector<N>) -> Self {
        mask.0
    }
}

impl<const N: usize> PartialEq<[bool; N]> for BoolVector<N> {
    #[inline]
    fn eq(&self, other: &[bool; N]) -> bool {
        &self.0 == other
    }
}

impl_unary_op!(Not, not, [const N: usize], BoolVector<N>, BoolVector<N>, |val| {
    BoolVector::from_fn(|i| !val.0[i])
});

impl_binop!(BitAnd, bitand, [const N: usize], BoolVector<N>, BoolVector<N>, BoolVector<N>, |a, b| {
    BoolVector::from_fn(|i| a.0[i] & b.0[i])
});

impl_binop!(BitOr, bitor, [const N: usize], BoolVector<N>, BoolVector<N>, BoolVector<N>, |a, b| {
    BoolVector::from_fn(|i| a.0[i] | b.0[i])
});

impl_binop!(BitXor, bitxor, [const N: usize], BoolVector<N>, BoolVector<N>, BoolVector<N>, |a, b| {
    BoolVector::from_fn(|i| a.0[i] ^ b.0[i])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reductions_work() {
        let mask = Bool3::from_array([true, false, true]);
        assert!(mask.any());
        assert!(!mask.all());
        assert!(!mask.none());
        assert_eq!(mask.count(), 2);

        let empty = Bool2::from_array([false, false]);
        assert!(empty.none());
        assert!(!empty.any());
        assert_eq!(empty.count(), 0);

        assert!(Bool4::from_array([true; 4]).all());
    }

    #[test]
    fn component_access_works() {
        let mask = Bool2::from_array([false, true]);
        assert!(!mask[0]);
        assert!(mask[1]);
        assert_eq!(mask.get(1), Ok(true));
        assert_eq!(
            mask.get(2),
            Err(VectorError::IndexOutOfRange {
                operation: "get",
                index: 2,
                arity: 2
            })
        );
        assert_eq!(mask.iter().collect::<Vec<_>>(), vec![false, true]);
        assert_eq!(<[bool; 2]>::from(mask), [false, true]);
        assert_eq!(mask.to_array(), [false, true]);
    }

    #[test]
    fn logical_operators_are_elementwise() {
        let a = Bool4::from_array([true, true, false, false]);
        let b = Bool4::from_array([true, false, true, false]);
        assert_eq!(a & b, [true, false, false, false]);
        assert_eq!(a | b, [true, true, true, false]);
        assert_eq!(a ^ b, [false, true, true, false]);
        assert_eq!(!a, [false, false, true, true]);
        assert_eq!(!&a, !a);
    }
}
