use crate::{
    math::{Float, NearlyEqual, NearlyEqualMethod},
    semiring::Semiring,
};

/// The ordinary `(+, ×)` semiring over the reals. Potentials are used as
/// multiplicative weights directly, so with every potential set to `1` the
/// aggregate counts paths.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Real<T>(pub T);

impl<T: Float> Semiring for Real<T> {
    type Scalar = T;

    #[inline]
    fn zero() -> Self {
        Real(T::ZERO)
    }

    #[inline]
    fn one() -> Self {
        Real(T::ONE)
    }

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Real(self.0 + rhs.0)
    }

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Real(self.0 * rhs.0)
    }

    #[inline]
    fn convert(potential: T) -> Self {
        Real(potential)
    }

    #[inline]
    fn value(self) -> T {
        self.0
    }
}

impl<T: Float + NearlyEqual<T>> NearlyEqual<T> for Real<T> {
    #[inline]
    fn nearly_equal<M: NearlyEqualMethod<T>>(&self, b: &Self, method: &M) -> (bool, Option<(T, T)>) {
        self.0.nearly_equal(&b.0, method)
    }
}
