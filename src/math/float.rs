use std::{
    fmt::{Debug, Display},
    ops::{Add, AddAssign, Div, Mul, Neg, Sub},
};

use crate::private::Sealed;

/// Trait for providing generic functionality over floating point numbers.
///
/// Potentials, semiring payloads, and marginals are all generic over this
/// trait, which is implemented for `f32` and `f64`.
pub trait Float:
    Sub<Output = Self>
    + Add<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + Default
    + PartialEq
    + PartialOrd
    + Copy
    + Debug
    + Display
    + Send
    + Sync
    + std::iter::Sum<Self>
    + for<'a> std::iter::Sum<&'a Self>
    + 'static
    + Sealed {
    const MIN_POSITIVE: Self;
    const MAX: Self;
    const ZERO: Self;
    const ONE: Self;
    const INFINITY: Self;
    const NEG_INFINITY: Self;

    /// Generic absolute value for [`Float`]
    #[must_use]
    fn abs(self) -> Self;

    /// Generic maximum of 2 values for [`Float`]
    #[must_use]
    fn max(self, other: Self) -> Self;

    /// Generic minimum of 2 values for [`Float`]
    #[must_use]
    fn min(self, other: Self) -> Self;

    /// Generic `is_nan` calculation for [`Float`]
    #[must_use]
    fn is_nan(self) -> bool;

    /// Generic `is_infinite` for [`Float`]
    #[must_use]
    fn is_infinite(self) -> bool;

    /// Generic natural logarithm for [`Float`]
    #[must_use]
    fn ln(self) -> Self;

    /// Generic `ln(1 + x)` for [`Float`], accurate for small `x`
    #[must_use]
    fn ln_1p(self) -> Self;

    /// Generic exponential for [`Float`]
    #[must_use]
    fn exp(self) -> Self;

    /// Use a primitive cast to convert a usize to the [`Float`]
    fn usize_as_self(a: usize) -> Self;

    /// Use a primitive cast to convert an `f64` to the [`Float`]
    fn from_f64(a: f64) -> Self;
}

/// Implement [`Float`] for multiple floating point primitive types
macro_rules! impl_float {
    {$($ty:ty),* } => {
        $(
        impl Sealed for $ty {}

        impl Float for $ty {
            const MIN_POSITIVE: Self = <$ty>::MIN_POSITIVE;
            const MAX: Self = <$ty>::MAX;
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const INFINITY: Self = <$ty>::INFINITY;
            const NEG_INFINITY: Self = <$ty>::NEG_INFINITY;

            #[inline]
            fn abs(self) -> Self {
                self.abs()
            }

            #[inline]
            fn max(self, other: Self) -> Self {
                self.max(other)
            }

            #[inline]
            fn min(self, other: Self) -> Self {
                self.min(other)
            }

            #[inline]
            fn is_nan(self) -> bool {
                self.is_nan()
            }

            #[inline]
            fn is_infinite(self) -> bool {
                self.is_infinite()
            }

            #[inline]
            fn ln(self) -> Self {
                self.ln()
            }

            #[inline]
            fn ln_1p(self) -> Self {
                self.ln_1p()
            }

            #[inline]
            fn exp(self) -> Self {
                self.exp()
            }

            #[inline]
            #[allow(clippy::cast_precision_loss)]
            fn usize_as_self(a: usize) -> $ty {
                a as $ty
            }

            #[inline]
            #[allow(clippy::cast_possible_truncation)]
            fn from_f64(a: f64) -> $ty {
                a as $ty
            }
        } )*

     }
}

impl_float!(f32, f64);

/// Adds two values in log space, `ln(e^a + e^b)`, without leaving log space.
///
/// Negative infinity acts as the log of zero, so `log_add_exp(-inf, b)` is
/// exactly `b` and two negative infinities stay negative infinity.
#[inline]
#[must_use]
pub fn log_add_exp<T: Float>(a: T, b: T) -> T {
    let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
    if lo == T::NEG_INFINITY {
        hi
    } else {
        hi + (lo - hi).exp().ln_1p()
    }
}

/// Computes `ln(sum(e^x))` over an iterator of log space values, shifting by
/// the maximum for stability. An empty iterator gives negative infinity.
#[must_use]
pub fn log_sum_exp<T: Float, I>(values: I) -> T
where
    I: IntoIterator<Item = T>,
    I::IntoIter: Clone, {
    let values = values.into_iter();
    let max = values.clone().fold(T::NEG_INFINITY, Float::max);

    if max == T::NEG_INFINITY || max.is_infinite() {
        return max;
    }

    max + values.map(|x| (x - max).exp()).sum::<T>().ln()
}
