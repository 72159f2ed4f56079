//! Implementations of
//! [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
//! for alignment instances, for fuzzing the scan against the brute-force
//! enumeration.
//!
//! <div class="warning note">
//!
//! **Note**
//!
//! You must enable the *fuzzing* feature in your `Cargo.toml` to use these
//! functions.
//!
//! </div>

use crate::{
    alignment::{AlignmentMode, EdgePotentials},
    math::Float,
};
use arbitrary::{Arbitrary, Result, Unstructured};
use std::marker::PhantomData;

/// A type holding the parameters for generating an arbitrary value of
/// [`ArbitrarySpecs::Output`].
pub trait ArbitrarySpecs<'a> {
    type Output;

    /// Generates an arbitrary value following these specifications.
    ///
    /// ## Errors
    ///
    /// Fails if `u` runs out of data or holds invalid data.
    fn make_arbitrary(&self, u: &mut Unstructured<'a>) -> Result<Self::Output>;
}

/// Edge potentials with one length per batch element, ready to be passed to
/// [`Alignment::compute`](crate::alignment::Alignment::compute).
#[derive(Clone, Debug, PartialEq)]
pub struct AlignmentInstance<T> {
    pub potentials: EdgePotentials<T>,
    pub lengths:    Vec<usize>,
}

/// Specifications for generating an arbitrary [`AlignmentInstance`].
///
/// Potentials are finite multiples of `1/100` in `[-scale, scale]`. With
/// [`AlignmentMode::Local`], they also satisfy the local sign constraints.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct AlignmentInstanceSpecs<T> {
    /// The largest batch size
    pub max_batch: usize,
    /// The largest padded length of the first sequence
    pub max_n:     usize,
    /// The largest length of the second sequence
    pub max_m:     usize,
    /// The magnitude bound of the potentials
    pub scale:     u16,
    /// Which sign constraints to honor
    pub mode:      AlignmentMode,
    /// The desired floating point type
    pub float:     PhantomData<T>,
}

impl<T> Default for AlignmentInstanceSpecs<T> {
    fn default() -> Self {
        Self {
            max_batch: 3,
            max_n:     6,
            max_m:     6,
            scale:     4,
            mode:      AlignmentMode::Global,
            float:     PhantomData,
        }
    }
}

impl<'a, T: Float> ArbitrarySpecs<'a> for AlignmentInstanceSpecs<T> {
    type Output = AlignmentInstance<T>;

    fn make_arbitrary(&self, u: &mut Unstructured<'a>) -> Result<Self::Output> {
        let batch = u.int_in_range(1..=self.max_batch.max(1))?;
        let n = u.int_in_range(1..=self.max_n.max(1))?;
        let m = u.int_in_range(1..=self.max_m.max(1))?;

        let bound = i32::from(self.scale) * 100;
        let mut cells = Vec::with_capacity(batch * n * m);
        for _ in 0..batch * n * m {
            let mut cell = [T::ZERO; 3];
            for v in &mut cell {
                *v = T::from_f64(f64::from(u.int_in_range(-bound..=bound)?) / 100.0);
            }

            if self.mode == AlignmentMode::Local {
                let [insert, matched, delete] = cell;
                cell = [-insert.abs(), matched.abs(), -delete.abs()];
            }
            cells.push(cell);
        }

        let potentials =
            EdgePotentials::from_cells(cells, batch, n, m).map_err(|_| arbitrary::Error::IncorrectFormat)?;

        let mut lengths = Vec::with_capacity(batch);
        for _ in 0..batch {
            lengths.push(u.int_in_range(1..=n)?);
        }
        let full = u.choose_index(batch)?;
        lengths[full] = n;

        Ok(AlignmentInstance { potentials, lengths })
    }
}

impl<'a, T: Float> Arbitrary<'a> for AlignmentInstance<T> {
    #[inline]
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        AlignmentInstanceSpecs::default().make_arbitrary(u)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        alignment::Alignment,
        assert_fp_eq,
        semiring::Log,
    };

    const BYTES: [u8; 64] = [
        0x9b, 0x17, 0x3c, 0xe2, 0x41, 0x88, 0x05, 0x7f, 0xd0, 0x6a, 0x23, 0xb4, 0x1e, 0xf9, 0x52, 0x0c, 0x93, 0x2d, 0x77,
        0xc1, 0x38, 0xea, 0x64, 0x0f, 0xab, 0x46, 0x81, 0x1d, 0xcc, 0x5e, 0x72, 0x09, 0x3f, 0xb8, 0x27, 0xd5, 0x60, 0x14,
        0xee, 0x8a, 0x31, 0x4c, 0x97, 0x02, 0xfd, 0x6e, 0x19, 0xa3, 0x55, 0xc8, 0x0b, 0x7a, 0xe5, 0x2f, 0x90, 0x44, 0xbd,
        0x13, 0x68, 0xda, 0x36, 0x81, 0xf2, 0x5b,
    ];

    #[test]
    fn scan_matches_enumeration() {
        for mode in [AlignmentMode::Global, AlignmentMode::Local] {
            for offset in 0..8 {
                let mut u = Unstructured::new(&BYTES[offset..]);
                let specs = AlignmentInstanceSpecs::<f64> {
                    mode,
                    ..Default::default()
                };
                let instance = specs.make_arbitrary(&mut u).unwrap();
                let lengths = Some(instance.lengths.as_slice());

                let alignment = Alignment::<Log<f64>>::new(mode);
                let scanned = alignment.sum(&instance.potentials, lengths).unwrap();
                let listed = alignment.enumerate(&instance.potentials, lengths).unwrap();
                assert_fp_eq!(scanned, listed.aggregate, 1e-9);

                // Zero log potentials give every path weight one
                let counted = alignment.sum(&instance.potentials.map(|_| 0.0), lengths).unwrap();
                let paths: Vec<_> = listed.paths.iter().map(|p| Log((p.len() as f64).ln())).collect();
                assert_fp_eq!(counted, paths, 1e-9);
            }
        }
    }

    #[test]
    fn local_instances_satisfy_constraints() {
        let mut u = Unstructured::new(&BYTES);
        let specs = AlignmentInstanceSpecs::<f32> {
            mode: AlignmentMode::Local,
            ..Default::default()
        };
        let instance = specs.make_arbitrary(&mut u).unwrap();
        assert!(Alignment::<Log<f32>>::local().sum(&instance.potentials, None).is_ok());
    }
}
