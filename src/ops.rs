//! Arithmetic and elementwise comparison operators.

use crate::{mask::BoolVector, vector::Vector};

impl_binop!(Add, add, [const N: usize], Vector<N>, Vector<N>, Vector<N>, |a, b| {
    a.zip_mapped(b, |a, b| a + b)
});

impl_binop!(Sub, sub, [const N: usize], Vector<N>, Vector<N>, Vector<N>, |a, b| {
    a.zip_mapped(b, |a, b| a - b)
});

impl_binop!(Mul, mul, [const N: usize], Vector<N>, Vector<N>, Vector<N>, |a, b| {
    a.zip_mapped(b, |a, b| a * b)
});

impl_binop!(Div, div, [const N: usize], Vector<N>, Vector<N>, Vector<N>, |a, b| {
    a.zip_mapped(b, |a, b| a / b)
});

impl_binop!(Rem, rem, [const N: usize], Vector<N>, Vector<N>, Vector<N>, |a, b| {
    a.zip_mapped(b, |a, b| a % b)
});

impl_binop!(Add, add, [const N: usize], Vector<N>, f64, Vector<N>, |a, b| {
    a.mapped(|a| a + *b)
});

impl_binop!(Sub, sub, [const N: usize], Vector<N>, f64, Vector<N>, |a, b| {
    a.mapped(|a| a - *b)
});

impl_binop!(Mul, mul, [const N: usize], Vector<N>, f64, Vector<N>, |a, b| {
    a.mapped(|a| a * *b)
});

impl_binop!(Div, div, [const N: usize], Vector<N>, f64, Vector<N>, |a, b| {
    a.mapped(|a| a / *b)
});

impl_binop!(Rem, rem, [const N: usize], Vector<N>, f64, Vector<N>, |a, b| {
    a.mapped(|a| a % *b)
});

impl_binop!(Add, add, [const N: usize], f64, Vector<N>, Vector<N>, |a, b| {
    b.mapped(|b| *a + b)
});

impl_binop!(Sub, sub, [const N: usize], f64, Vector<N>, Vector<N>, |a, b| {
    b.mapped(|b| *a - b)
});

impl_binop!(Mul, mul, [const N: usize], f64, Vector<N>, Vector<N>, |a, b| {
    b.mapped(|b| *a * b)
});

impl_binop!(Div, div, [const N: usize], f64, Vector<N>, Vector<N>, |a, b| {
    b.mapped(|b| *a / b)
});

impl_binop!(Rem, rem, [const N: usize], f64, Vector<N>, Vector<N>, |a, b| {
    b.mapped(|b| *a % b)
});

impl_unary_op!(Neg, neg, [const N: usize], Vector<N>, Vector<N>, |val| {
    val.mapped(|component| -component)
});

macro_rules! impl_assign_ops {
    ($($op:ident, $method:ident, $binop:tt);+ $(;)?) => {
        $(
            impl_binop_assign!($op, $method, [const N: usize], Vector<N>, Vector<N>, |a, b| {
                *a = *a $binop *b;
            });

            impl_binop_assign!($op, $method, [const N: usize], Vector<N>, f64, |a, b| {
                *a = *a $binop *b;
            });
        )+
    };
}

impl_assign_ops!(
    AddAssign, add_assign, +;
    SubAssign, sub_assign, -;
    MulAssign, mul_assign, *;
    DivAssign, div_assign, /;
    RemAssign, rem_assign, %;
);

impl<const N: usize> Vector<N> {
    /// Compares each component with the corresponding component of `rhs`
    /// using `==`. A scalar `rhs` is broadcast.
    #[inline]
    pub fn cmpeq(&self, rhs: impl Into<Self>) -> BoolVector<N> {
        self.compared(rhs.into(), |a, b| a == b)
    }

    /// Compares each component with the corresponding component of `rhs`
    /// using `!=`. A scalar `rhs` is broadcast.
    #[inline]
    pub fn cmpne(&self, rhs: impl Into<Self>) -> BoolVector<N> {
        self.compared(rhs.into(), |a, b| a != b)
    }

    /// Compares each component with the corresponding component of `rhs`
    /// using `>`. A scalar `rhs` is broadcast.
    #[inline]
    pub fn cmpgt(&self, rhs: impl Into<Self>) -> BoolVector<N> {
        self.compared(rhs.into(), |a, b| a > b)
    }

    /// Compares each component with the corresponding component of `rhs`
    /// using `>=`. A scalar `rhs` is broadcast.
    #[inline]
    pub fn cmpge(&self, rhs: impl Into<Self>) -> BoolVector<N> {
        self.compared(rhs.into(), |a, b| a >= b)
    }

    /// Compares each component with the corresponding component of `rhs`
    /// using `<`. A scalar `rhs` is broadcast.
    #[inline]
    pub fn cmplt(&self, rhs: impl Into<Self>) -> BoolVector<N> {
        self.compared(rhs.into(), |a, b| a < b)
    }

    /// Compares each component with the corresponding component of `rhs`
    /// using `<=`. A scalar `rhs` is broadcast.
    #[inline]
    pub fn cmple(&self, rhs: impl Into<Self>) -> BoolVector<N> {
        self.compared(rhs.into(), |a, b| a <= b)
    }

    /// Picks each component from `if_true` where the mask is set and from
    /// `if_false` elsewhere.
    #[inline]
    pub fn select(mask: BoolVector<N>, if_true: Self, if_false: Self) -> Self {
        Self::from_fn(|i| if mask[i] { if_true[i] } else { if_false[i] })
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.iter().zip(other.iter()).map(|(a, b)| a * b).sum()
    }

    /// Computes the component-wise minimum of this and another vector.
    #[inline]
    pub fn component_min(&self, other: &Self) -> Self {
        self.zip_mapped(other, f64::min)
    }

    /// Computes the component-wise maximum of this and another vector.
    #[inline]
    pub fn component_max(&self, other: &Self) -> Self {
        self.zip_mapped(other, f64::max)
    }

    /// Computes the component-wise absolute value.
    #[inline]
    pub fn component_abs(&self) -> Self {
        self.mapped(f64::abs)
    }

    fn compared(&self, rhs: Self, cmp: impl Fn(f64, f64) -> bool) -> BoolVector<N> {
        BoolVector::from_fn(|i| cmp(self[i], rhs[i]))
    }
}
