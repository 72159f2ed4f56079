use crate::{
    math::{Float, NearlyEqual, NearlyEqualMethod},
    semiring::Semiring,
};

/// The max-plus (Viterbi) semiring. The aggregate is the score of the single
/// best path.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Max<T>(pub T);

impl<T: Float> Semiring for Max<T> {
    type Scalar = T;

    #[inline]
    fn zero() -> Self {
        Max(T::NEG_INFINITY)
    }

    #[inline]
    fn one() -> Self {
        Max(T::ZERO)
    }

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Max(self.0.max(rhs.0))
    }

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Max(self.0 + rhs.0)
    }

    #[inline]
    fn convert(potential: T) -> Self {
        Max(potential)
    }

    #[inline]
    fn value(self) -> T {
        self.0
    }
}

impl<T: Float + NearlyEqual<T>> NearlyEqual<T> for Max<T> {
    #[inline]
    fn nearly_equal<M: NearlyEqualMethod<T>>(&self, b: &Self, method: &M) -> (bool, Option<(T, T)>) {
        self.0.nearly_equal(&b.0, method)
    }
}
