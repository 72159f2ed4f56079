//! ## Seeded random alignment instances
//!
//! Potentials and lengths for testing and benchmarking the alignment scan.
//! The same seed always gives the same instance.

use crate::{
    alignment::{EdgePotentials, ShapeError},
    math::Float,
};
use rand_xoshiro::{
    Xoshiro256PlusPlus,
    rand_core::{RngCore, SeedableRng},
};

/// A uniform sample from `[0, 1)` with 53 bits of precision.
#[inline]
#[allow(clippy::cast_precision_loss)]
fn unit_interval(rng: &mut Xoshiro256PlusPlus) -> f64 {
    let mantissa = (rng.next_u64() >> 11) as f64;
    mantissa * (1.0 / (1u64 << 53) as f64)
}

/// Edge potentials drawn uniformly from `[0, 1)`.
///
/// ## Errors
///
/// Returns [`ShapeError::EmptyAxis`] if any axis is zero.
pub fn rand_potentials<T: Float>(batch: usize, n: usize, m: usize, seed: u64) -> Result<EdgePotentials<T>, ShapeError> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    EdgePotentials::from_fn(batch, n, m, |_, _, _| {
        [(); 3].map(|()| T::from_f64(unit_interval(&mut rng)))
    })
}

/// Edge potentials that satisfy the local alignment sign constraints. Values
/// are drawn uniformly from `[-1, 1)`, then skips are set to `-2|x|` and
/// matches to `|x|`.
///
/// ## Errors
///
/// Returns [`ShapeError::EmptyAxis`] if any axis is zero.
pub fn rand_local_potentials<T: Float>(
    batch: usize, n: usize, m: usize, seed: u64,
) -> Result<EdgePotentials<T>, ShapeError> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    EdgePotentials::from_fn(batch, n, m, |_, _, _| {
        let mut draw = || (2.0 * unit_interval(&mut rng) - 1.0).abs();
        let (insert, matched, delete) = (draw(), draw(), draw());
        [-2.0 * insert, matched, -2.0 * delete].map(T::from_f64)
    })
}

/// One length in `1..=n` per batch element, with at least one equal to `n`.
#[must_use]
pub fn rand_lengths(batch: usize, n: usize, seed: u64) -> Vec<usize> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    if batch == 0 || n == 0 {
        return Vec::new();
    }

    let mut lengths: Vec<usize> = (0..batch).map(|_| 1 + rng.next_u32() as usize % n).collect();
    let full = rng.next_u32() as usize % batch;
    lengths[full] = n;
    lengths
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn potentials_are_seeded() {
        let a = rand_potentials::<f64>(2, 3, 4, 42).unwrap();
        let b = rand_potentials::<f64>(2, 3, 4, 42).unwrap();
        let c = rand_potentials::<f64>(2, 3, 4, 43).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.shape(), [2, 3, 4, 3]);
        assert!(a.cells().all(|(_, cell)| cell.iter().all(|v| (0.0..1.0).contains(v))));
    }

    #[test]
    fn local_potentials_have_valid_signs() {
        let p = rand_local_potentials::<f32>(3, 5, 4, 7).unwrap();
        for (_, &[insert, matched, delete]) in p.cells() {
            assert!(insert <= 0.0 && insert >= -2.0);
            assert!(delete <= 0.0 && delete >= -2.0);
            assert!((0.0..=1.0).contains(&matched));
        }
    }

    #[test]
    fn lengths_reach_full() {
        for seed in 0..20 {
            let lengths = rand_lengths(4, 6, seed);
            assert_eq!(lengths.len(), 4);
            assert!(lengths.contains(&6));
            assert!(lengths.iter().all(|&l| (1..=6).contains(&l)));
        }
        assert!(rand_lengths(0, 6, 1).is_empty());
    }

    #[test]
    fn empty_shape_is_rejected() {
        assert_eq!(
            rand_potentials::<f64>(1, 0, 3, 1),
            Err(ShapeError::EmptyAxis([1, 0, 3]))
        );
    }
}
