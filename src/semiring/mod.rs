//! ## Semirings for path aggregation
//!
//! The alignment scan never adds or multiplies scores directly. Every
//! combination goes through a [`Semiring`], so the same recurrence can count
//! paths, compute a partition function, find the best path, or track
//! entropies and derivatives.
//!
//! | Semiring      | ⊕                 | ⊗      | zero        | one          | aggregate               |
//! |---------------|-------------------|--------|-------------|--------------|-------------------------|
//! | [`Real`]      | `+`               | `×`    | `0`         | `1`          | total weight            |
//! | [`Log`]       | log-sum-exp       | `+`    | `-∞`        | `0`          | log partition function  |
//! | [`Max`]       | `max`             | `+`    | `-∞`        | `0`          | best path score         |
//! | [`KMax`]      | top-`K` merge     | `+`    | `[-∞; K]`   | `[0, -∞...]` | `K` best path scores    |
//! | [`Entropy`]   | mixture           | `+`    | `(-∞, 0)`   | `(0, 0)`     | Shannon entropy         |
//! | [`LogDual`]   | log-sum-exp       | `+`    | `(-∞, 0)`   | `(0, 0)`     | derivative of `ln Z`    |
//!
//! All semiring values are plain [`Copy`] data, so a semiring that needs
//! several parallel copies (such as [`KMax`] or [`LogDual`]) carries them in
//! its value rather than in an extra tensor axis.

use crate::math::Float;
use std::fmt::Debug;

mod dual;
mod entropy;
mod kmax;
mod logspace;
mod max;
mod real;

pub use dual::*;
pub use entropy::*;
pub use kmax::*;
pub use logspace::*;
pub use max::*;
pub use real::*;

/// A commutative semiring `(S, ⊕, ⊗, 0, 1)` used to aggregate alignment
/// paths.
///
/// Implementors must satisfy the semiring laws: `⊕` is associative and
/// commutative with identity [`zero`], `⊗` is associative with identity
/// [`one`], `⊗` distributes over `⊕`, and `zero` annihilates under `⊗` (up to
/// components that are ignored whenever the value is zero, see [`Entropy`]).
///
/// [`zero`]: Semiring::zero
/// [`one`]: Semiring::one
pub trait Semiring: Copy + Debug + Send + Sync {
    /// The floating point type of the raw potentials this semiring consumes.
    type Scalar: Float;

    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Semiring addition, `self ⊕ rhs`.
    #[must_use]
    fn add(self, rhs: Self) -> Self;

    /// Semiring multiplication, `self ⊗ rhs`.
    #[must_use]
    fn mul(self, rhs: Self) -> Self;

    /// Converts a raw edge potential into a semiring value.
    fn convert(potential: Self::Scalar) -> Self;

    /// The primary scalar carried by the value. For the log-space semirings
    /// this is the log-space score, and it is what the brute-force oracle
    /// uses to rank individual paths.
    fn value(self) -> Self::Scalar;

    /// Semiring sum over a slice (the sum over the last axis of a stacked
    /// tensor). An empty slice gives [`zero`](Semiring::zero).
    #[inline]
    #[must_use]
    fn sum(values: &[Self]) -> Self {
        values.iter().fold(Self::zero(), |acc, &v| acc.add(v))
    }

    /// The semiring contraction `⊕_k a[k] ⊗ b[k]` over two slices of equal
    /// length.
    #[inline]
    #[must_use]
    fn dot(a: &[Self], b: &[Self]) -> Self {
        debug_assert_eq!(a.len(), b.len());
        a.iter().zip(b).fold(Self::zero(), |acc, (&x, &y)| acc.add(x.mul(y)))
    }
}

#[cfg(test)]
mod test;
