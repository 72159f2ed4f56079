use crate::{
    math::{Float, NearlyEqual, NearlyEqualMethod},
    semiring::Semiring,
};

/// The k-best semiring. Each value holds the `K` best path scores as a
/// multiset sorted in decreasing order, padded with negative infinity when
/// fewer than `K` paths exist.
///
/// `K = 1` reduces to [`Max`](crate::semiring::Max).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KMax<T, const K: usize>(pub [T; K]);

impl<T: Float, const K: usize> KMax<T, K> {
    /// The best `K` scores, best first.
    #[inline]
    #[must_use]
    pub fn scores(&self) -> &[T; K] {
        &self.0
    }
}

impl<T: Float, const K: usize> Semiring for KMax<T, K> {
    type Scalar = T;

    #[inline]
    fn zero() -> Self {
        KMax([T::NEG_INFINITY; K])
    }

    #[inline]
    fn one() -> Self {
        let mut out = [T::NEG_INFINITY; K];
        if let Some(first) = out.first_mut() {
            *first = T::ZERO;
        }
        KMax(out)
    }

    /// Merges two sorted lists, keeping the top `K`.
    fn add(self, rhs: Self) -> Self {
        let mut out = [T::NEG_INFINITY; K];
        let (mut a, mut b) = (0, 0);

        for slot in &mut out {
            if b >= K || (a < K && self.0[a] >= rhs.0[b]) {
                *slot = self.0[a];
                a += 1;
            } else {
                *slot = rhs.0[b];
                b += 1;
            }
        }

        KMax(out)
    }

    /// The top `K` of all pairwise sums. Since both inputs are sorted, only
    /// pairs with `(a + 1) * (b + 1) <= K` can reach the top `K`.
    fn mul(self, rhs: Self) -> Self {
        let mut out = [T::NEG_INFINITY; K];

        for (a, &x) in self.0.iter().enumerate() {
            if x == T::NEG_INFINITY {
                break;
            }
            for &y in rhs.0.iter().take(K / (a + 1)) {
                if y == T::NEG_INFINITY {
                    break;
                }
                insert_sorted(&mut out, x + y);
            }
        }

        KMax(out)
    }

    #[inline]
    fn convert(potential: T) -> Self {
        let mut out = Self::zero();
        if let Some(first) = out.0.first_mut() {
            *first = potential;
        }
        out
    }

    #[inline]
    fn value(self) -> T {
        self.0.first().copied().unwrap_or(T::NEG_INFINITY)
    }
}

/// Inserts `value` into a list sorted in decreasing order, dropping the
/// smallest element.
#[inline]
fn insert_sorted<T: Float, const K: usize>(out: &mut [T; K], value: T) {
    let Some(mut i) = out.iter().position(|&v| value > v) else {
        return;
    };

    let mut carry = value;
    while i < K {
        std::mem::swap(&mut out[i], &mut carry);
        i += 1;
    }
}

impl<T: Float + NearlyEqual<T>, const K: usize> NearlyEqual<T> for KMax<T, K> {
    #[inline]
    fn nearly_equal<M: NearlyEqualMethod<T>>(&self, b: &Self, method: &M) -> (bool, Option<(T, T)>) {
        self.0.nearly_equal(&b.0, method)
    }
}
