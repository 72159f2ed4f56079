use crate::{
    math::{Float, NearlyEqual, NearlyEqualMethod, log_add_exp},
    semiring::Semiring,
};

/// The log semiring extended with a forward-mode tangent.
///
/// `value` is a log-space score exactly as in [`Log`](crate::semiring::Log)
/// and `tangent` is its derivative with respect to one seeded potential.
/// Seeding a single edge potential with a tangent of one makes the tangent of
/// the aggregate equal to `∂ ln Z / ∂θ`, which is the marginal probability
/// that the edge is used. See
/// [`Alignment::marginals`](crate::alignment::Alignment::marginals).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct LogDual<T> {
    pub value:   T,
    pub tangent: T,
}

impl<T: Float> LogDual<T> {
    /// A potential whose tangent is seeded with one.
    #[inline]
    #[must_use]
    pub fn seed(potential: T) -> Self {
        LogDual {
            value:   potential,
            tangent: T::ONE,
        }
    }

    #[inline]
    fn weighted_tangent(self, log_z: T) -> T {
        if self.value == T::NEG_INFINITY {
            T::ZERO
        } else {
            (self.value - log_z).exp() * self.tangent
        }
    }
}

impl<T: Float> Semiring for LogDual<T> {
    type Scalar = T;

    #[inline]
    fn zero() -> Self {
        LogDual {
            value:   T::NEG_INFINITY,
            tangent: T::ZERO,
        }
    }

    #[inline]
    fn one() -> Self {
        LogDual {
            value:   T::ZERO,
            tangent: T::ZERO,
        }
    }

    /// `d ln(e^a + e^b) = softmax(a, b) · (da, db)`
    #[inline]
    fn add(self, rhs: Self) -> Self {
        let value = log_add_exp(self.value, rhs.value);
        if value == T::NEG_INFINITY {
            return Self::zero();
        }

        LogDual {
            value,
            tangent: self.weighted_tangent(value) + rhs.weighted_tangent(value),
        }
    }

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        LogDual {
            value:   self.value + rhs.value,
            tangent: self.tangent + rhs.tangent,
        }
    }

    #[inline]
    fn convert(potential: T) -> Self {
        LogDual {
            value:   potential,
            tangent: T::ZERO,
        }
    }

    #[inline]
    fn value(self) -> T {
        self.value
    }
}

impl<T: Float + NearlyEqual<T>> NearlyEqual<T> for LogDual<T> {
    fn nearly_equal<M: NearlyEqualMethod<T>>(&self, b: &Self, method: &M) -> (bool, Option<(T, T)>) {
        let (eq, vals) = self.value.nearly_equal(&b.value, method);
        if eq {
            self.tangent.nearly_equal(&b.tangent, method)
        } else {
            (false, vals)
        }
    }
}
