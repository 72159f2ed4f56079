//! The logarithmic-depth diagonal scan.

use crate::{
    alignment::{
        Alignment, AlignmentError, AlignmentMode, EdgePotentials, ScanShape,
        chart::{Boundary, ChartArena, Drift},
        check_potentials,
    },
    semiring::Semiring,
};
use rayon::prelude::*;

mod init;
mod merge;

pub(crate) use init::*;
pub(crate) use merge::*;

/// The output of [`Alignment::compute`]: one aggregate per batch element and
/// the semiring-converted potentials the scan consumed.
#[derive(Clone, Debug)]
pub struct Scan<S> {
    pub aggregate:  Vec<S>,
    pub potentials: EdgePotentials<S>,
}

impl<S: Semiring> Alignment<S> {
    /// Aggregates all alignment paths of every batch element under the
    /// semiring `S`.
    ///
    /// `potentials` has shape `[batch, N, M, 3]`. When `lengths` is given, batch
    /// element `b` only uses the first `lengths[b]` rows of the first sequence
    /// axis.
    ///
    /// ## Errors
    ///
    /// Returns an [`AlignmentError`] if the lengths are invalid, or in local
    /// mode if a potential violates the sign constraints. See
    /// [`check_potentials`].
    ///
    /// ## Complexity
    ///
    /// Each batch element takes `⌈log₂(N + M)⌉` levels of `O((N + M)⁴)` total
    /// semiring work, with every level's blocks merged in parallel.
    pub fn compute(
        &self, potentials: &EdgePotentials<S::Scalar>, lengths: Option<&[usize]>,
    ) -> Result<Scan<S>, AlignmentError> {
        let validated = check_potentials::<S>(potentials, lengths, self.mode())?;
        let shape = ScanShape::new(validated.n(), validated.m());
        log::debug!(
            "{:?} scan over batch {} with N = {}, M = {}: {} levels, bin {}",
            self.mode(),
            validated.batch(),
            shape.n,
            shape.m,
            shape.levels,
            shape.bin
        );

        let converted = validated.potentials();
        let aggregate = validated
            .lengths()
            .par_iter()
            .enumerate()
            .map(|(b, &len)| self.scan_element(shape, len, |i, j| *converted.get(b, i, j)))
            .collect();

        Ok(Scan {
            aggregate,
            potentials: validated.into_potentials(),
        })
    }

    /// Like [`compute`](Alignment::compute) but only returns the aggregates.
    ///
    /// ## Errors
    ///
    /// The same as [`compute`](Alignment::compute).
    pub fn sum(
        &self, potentials: &EdgePotentials<S::Scalar>, lengths: Option<&[usize]>,
    ) -> Result<Vec<S>, AlignmentError> {
        self.compute(potentials, lengths).map(|scan| scan.aggregate)
    }

    /// Scans one batch element of length `len`, where `cell(i, j)` gives the
    /// converted potentials of lattice cell `(i, j)`.
    pub(crate) fn scan_element<F>(&self, shape: ScanShape, len: usize, cell: F) -> S
    where
        F: Fn(usize, usize) -> [S; 3], {
        let arena = self.build_charts(shape, len, cell);
        self.read_root(shape, len, &arena)
    }

    pub(crate) fn build_charts<F>(&self, shape: ScanShape, len: usize, cell: F) -> ChartArena<S>
    where
        F: Fn(usize, usize) -> [S; 3], {
        let diagonal = diagonal_chart(shape, len, cell);
        let first = first_level(shape, &diagonal, len);
        let mut arena = ChartArena::new(diagonal, first);

        let local = self.mode() == AlignmentMode::Local;
        for level in 2..=shape.levels {
            let next = merge(arena.top(), local);
            log::trace!("merged level {level} into {} blocks", next.width());
            arena.push(next);
        }

        arena
    }

    fn read_root(&self, shape: ScanShape, len: usize, arena: &ChartArena<S>) -> S {
        debug_assert_eq!(arena.depth(), shape.levels + 1);
        debug_assert_eq!(arena.diagonal().bin(), shape.bin);
        let root = arena.top();

        match self.mode() {
            AlignmentMode::Global => root.get(
                0,
                shape.end_row(len),
                shape.start_row(),
                Boundary::Open,
                Boundary::Open,
                Drift::Mid,
            ),
            AlignmentMode::Local => {
                let mut closed = Vec::with_capacity(shape.bin * shape.bin);
                for end in 0..shape.bin {
                    for start in 0..shape.bin {
                        closed.push(root.get(0, end, start, Boundary::Close, Boundary::Close, Drift::Mid));
                    }
                }
                S::sum(&closed)
            }
        }
    }
}
