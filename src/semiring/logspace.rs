use crate::{
    math::{Float, NearlyEqual, NearlyEqualMethod, log_add_exp, log_sum_exp},
    semiring::Semiring,
};

/// The log semiring: potentials are log weights, `⊕` is log-sum-exp, and `⊗`
/// is addition. The aggregate is the log partition function `ln Z` over all
/// paths.
///
/// With every potential set to `0`, the aggregate is the log of the number of
/// paths.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Log<T>(pub T);

impl<T: Float> Semiring for Log<T> {
    type Scalar = T;

    #[inline]
    fn zero() -> Self {
        Log(T::NEG_INFINITY)
    }

    #[inline]
    fn one() -> Self {
        Log(T::ZERO)
    }

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Log(log_add_exp(self.0, rhs.0))
    }

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Log(self.0 + rhs.0)
    }

    #[inline]
    fn convert(potential: T) -> Self {
        Log(potential)
    }

    #[inline]
    fn value(self) -> T {
        self.0
    }

    #[inline]
    fn sum(values: &[Self]) -> Self {
        Log(log_sum_exp(values.iter().map(|v| v.0)))
    }

    #[inline]
    fn dot(a: &[Self], b: &[Self]) -> Self {
        debug_assert_eq!(a.len(), b.len());
        Log(log_sum_exp(a.iter().zip(b).map(|(x, y)| x.0 + y.0)))
    }
}

impl<T: Float + NearlyEqual<T>> NearlyEqual<T> for Log<T> {
    #[inline]
    fn nearly_equal<M: NearlyEqualMethod<T>>(&self, b: &Self, method: &M) -> (bool, Option<(T, T)>) {
        self.0.nearly_equal(&b.0, method)
    }
}
