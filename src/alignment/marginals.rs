//! Per-edge posteriors by forward-mode differentiation of the log partition.
//!
//! Every edge gets its own full scan, so this is only practical for small
//! lattices. It is meant for checking and inspecting models, alongside
//! [`enumerate`](crate::alignment::Alignment::enumerate).

use crate::{
    alignment::{Alignment, AlignmentError, EdgePotentials, Move, ScanShape, check_potentials},
    math::Float,
    semiring::LogDual,
};
use rayon::prelude::*;

impl<T: Float> Alignment<LogDual<T>> {
    /// The posterior probability that each edge is used, `∂ ln Z / ∂θ`, with
    /// the same shape as `potentials`.
    ///
    /// Each edge is found with its own forward-mode scan in which only that
    /// edge's tangent is seeded. Edges of cells past a batch element's length
    /// are zero.
    ///
    /// ## Errors
    ///
    /// The same as [`compute`](Alignment::compute).
    ///
    /// ## Complexity
    ///
    /// `3 · N · M` scans per batch element, run in parallel. Each scan costs
    /// as much as one [`compute`](Alignment::compute) of that element.
    pub fn marginals(
        &self, potentials: &EdgePotentials<T>, lengths: Option<&[usize]>,
    ) -> Result<EdgePotentials<T>, AlignmentError> {
        let validated = check_potentials::<LogDual<T>>(potentials, lengths, self.mode())?;
        let (batch, n, m) = (validated.batch(), validated.n(), validated.m());
        let shape = ScanShape::new(n, m);
        let converted = validated.potentials();
        let lengths = validated.lengths();

        let cells = (0..batch * n * m)
            .into_par_iter()
            .map(|flat| {
                let (b, i, j) = (flat / (n * m), (flat / m) % n, flat % m);
                if i >= lengths[b] {
                    return [T::ZERO; 3];
                }

                Move::ALL.map(|op| {
                    let seeded = |ci: usize, cj: usize| {
                        let mut cell = *converted.get(b, ci, cj);
                        if (ci, cj) == (i, j) {
                            cell[op as usize].tangent = T::ONE;
                        }
                        cell
                    };
                    self.scan_element(shape, lengths[b], seeded).tangent
                })
            })
            .collect();

        Ok(EdgePotentials::from_cells(cells, batch, n, m)?)
    }
}
