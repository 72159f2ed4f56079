use crate::{
    math::{Float, NearlyEqual, NearlyEqualMethod, log_add_exp},
    semiring::Semiring,
};

/// The entropy semiring. Each value pairs the log partition function of a set
/// of paths with the Shannon entropy (in nats) of the Gibbs distribution over
/// that set.
///
/// Potentials are log weights, as in [`Log`](crate::semiring::Log). The
/// aggregate's [`entropy`](Entropy::entropy) is the entropy of the path
/// distribution, which is the quantity a gradient of the entropy-augmented
/// objective would produce.
///
/// Whenever `log_z` is negative infinity the value is the semiring zero and
/// its `entropy` component is ignored by [`add`](Semiring::add).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Entropy<T> {
    /// Log partition function of the path set
    pub log_z:   T,
    /// Entropy of the normalized distribution over the path set
    pub entropy: T,
}

impl<T: Float> Entropy<T> {
    /// The entropy of the path distribution.
    #[inline]
    #[must_use]
    pub fn entropy(self) -> T {
        self.entropy
    }

    /// The weighted contribution of `self` to a mixture with log partition
    /// function `log_z`.
    #[inline]
    fn mixture_term(self, log_z: T) -> T {
        if self.log_z == T::NEG_INFINITY {
            T::ZERO
        } else {
            let log_p = self.log_z - log_z;
            log_p.exp() * (self.entropy - log_p)
        }
    }
}

impl<T: Float> Semiring for Entropy<T> {
    type Scalar = T;

    #[inline]
    fn zero() -> Self {
        Entropy {
            log_z:   T::NEG_INFINITY,
            entropy: T::ZERO,
        }
    }

    #[inline]
    fn one() -> Self {
        Entropy {
            log_z:   T::ZERO,
            entropy: T::ZERO,
        }
    }

    /// The entropy of a mixture of two disjoint path sets `A` and `B` is
    /// `p(A)(H(A) - ln p(A)) + p(B)(H(B) - ln p(B))`.
    #[inline]
    fn add(self, rhs: Self) -> Self {
        let log_z = log_add_exp(self.log_z, rhs.log_z);
        if log_z == T::NEG_INFINITY {
            return Self::zero();
        }

        Entropy {
            log_z,
            entropy: self.mixture_term(log_z) + rhs.mixture_term(log_z),
        }
    }

    /// Concatenated path segments are independent, so entropies add.
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Entropy {
            log_z:   self.log_z + rhs.log_z,
            entropy: self.entropy + rhs.entropy,
        }
    }

    #[inline]
    fn convert(potential: T) -> Self {
        Entropy {
            log_z:   potential,
            entropy: T::ZERO,
        }
    }

    #[inline]
    fn value(self) -> T {
        self.log_z
    }
}

impl<T: Float + NearlyEqual<T>> NearlyEqual<T> for Entropy<T> {
    fn nearly_equal<M: NearlyEqualMethod<T>>(&self, b: &Self, method: &M) -> (bool, Option<(T, T)>) {
        let (eq, vals) = self.log_z.nearly_equal(&b.log_z, method);
        if !eq {
            return (false, vals);
        }
        // The entropy of the zero element is meaningless
        if self.log_z == T::NEG_INFINITY {
            return (true, None);
        }
        self.entropy.nearly_equal(&b.entropy, method)
    }
}
