//! Storage for the diagonal scan.
//!
//! Level zero holds one value per diagonal, row, and [`Drift`]. Every higher
//! level holds, per block of `2^level` diagonals, the aggregate of all path
//! fragments from a start row to an end row. Entries are indexed by
//! `(position, end row, start row, end boundary, start boundary, drift)`, where
//! the drift is the move that entered the block's first visited cell. Charts
//! are built whole and then frozen inside a [`ChartArena`].

use crate::{alignment::Move, semiring::Semiring};
use rayon::prelude::*;

/// Whether a path fragment may still be extended past a block edge (`Open`)
/// or has started or stopped inside the block (`Close`). Only local alignment
/// produces closed fragments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Boundary {
    Open  = 0,
    Close = 1,
}

impl Boundary {
    pub(crate) const ALL: [Boundary; 2] = [Boundary::Open, Boundary::Close];
}

/// The row change of the move entering a cell, in rotated coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Drift {
    /// Row increases by one ([`Move::Insert`])
    Down = 0,
    /// Row is unchanged ([`Move::Match`])
    Mid  = 1,
    /// Row decreases by one ([`Move::Delete`])
    Up   = 2,
}

impl Drift {
    pub(crate) const ALL: [Drift; 3] = [Drift::Down, Drift::Mid, Drift::Up];
}

impl From<Move> for Drift {
    #[inline]
    fn from(value: Move) -> Self {
        match value {
            Move::Insert => Drift::Down,
            Move::Match => Drift::Mid,
            Move::Delete => Drift::Up,
        }
    }
}

/// Level zero: each lattice cell's three potentials at its rotated
/// coordinate. Boundaries are implicit since a single cell is both open and
/// closed at either end.
#[derive(Clone, Debug)]
pub(crate) struct DiagonalChart<S> {
    bin:   usize,
    cells: Vec<S>,
}

impl<S: Semiring> DiagonalChart<S> {
    pub(crate) fn new(bin: usize) -> Self {
        DiagonalChart {
            bin,
            cells: vec![S::zero(); bin * bin * 3],
        }
    }

    #[inline]
    fn offset(&self, x: usize, y: usize, drift: Drift) -> usize {
        (x * self.bin + y) * 3 + drift as usize
    }

    #[inline]
    pub(crate) fn get(&self, x: usize, y: usize, drift: Drift) -> S {
        self.cells[self.offset(x, y, drift)]
    }

    #[inline]
    pub(crate) fn set_cell(&mut self, x: usize, y: usize, values: [S; 3]) {
        let start = self.offset(x, y, Drift::Down);
        self.cells[start..start + 3].copy_from_slice(&values);
    }

    #[inline]
    pub(crate) fn bin(&self) -> usize {
        self.bin
    }
}

/// The charts of one level at or above one. Each position is a contiguous
/// block of `bin * bin * 12` values.
#[derive(Clone, Debug)]
pub(crate) struct Chart<S> {
    width: usize,
    bin:   usize,
    cells: Vec<S>,
}

impl<S: Semiring> Chart<S> {
    pub(crate) fn new(width: usize, bin: usize) -> Self {
        Chart {
            width,
            bin,
            cells: vec![S::zero(); width * Self::stride_for(bin)],
        }
    }

    #[inline]
    fn stride_for(bin: usize) -> usize {
        bin * bin * 12
    }

    /// Values per position.
    #[inline]
    pub(crate) fn stride(&self) -> usize {
        Self::stride_for(self.bin)
    }

    #[inline]
    pub(crate) fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub(crate) fn bin(&self) -> usize {
        self.bin
    }

    /// Offset of an entry within its position's block.
    #[inline]
    pub(crate) fn local_offset(
        bin: usize, end: usize, start: usize, end_bound: Boundary, start_bound: Boundary, drift: Drift,
    ) -> usize {
        ((((end * bin + start) * 2 + end_bound as usize) * 2 + start_bound as usize) * 3) + drift as usize
    }

    #[inline]
    fn offset(
        &self, pos: usize, end: usize, start: usize, end_bound: Boundary, start_bound: Boundary, drift: Drift,
    ) -> usize {
        pos * self.stride() + Self::local_offset(self.bin, end, start, end_bound, start_bound, drift)
    }

    #[inline]
    pub(crate) fn get(
        &self, pos: usize, end: usize, start: usize, end_bound: Boundary, start_bound: Boundary, drift: Drift,
    ) -> S {
        self.cells[self.offset(pos, end, start, end_bound, start_bound, drift)]
    }

    /// Writes `values` (indexed by drift) for every boundary combination.
    pub(crate) fn broadcast(&mut self, pos: usize, end: usize, start: usize, values: [S; 3]) {
        for end_bound in Boundary::ALL {
            for start_bound in Boundary::ALL {
                let at = self.offset(pos, end, start, end_bound, start_bound, Drift::Down);
                self.cells[at..at + 3].copy_from_slice(&values);
            }
        }
    }

    /// Fills every position from `from` onward with the identity: a fragment
    /// that enters and leaves each row unchanged, open at both ends.
    pub(crate) fn identity_fill(&mut self, from: usize) {
        for pos in from..self.width {
            for y in 0..self.bin {
                let at = self.offset(pos, y, y, Boundary::Open, Boundary::Open, Drift::Mid);
                self.cells[at] = S::one();
            }
        }
    }

    /// The positions as disjoint mutable blocks, for filling in parallel.
    pub(crate) fn par_positions_mut(&mut self) -> rayon::slice::ChunksMut<'_, S> {
        let stride = self.stride();
        self.cells.par_chunks_mut(stride)
    }
}

/// The charts of every level of one scan, indexed by level. Once pushed, a
/// chart is only read.
#[derive(Debug)]
pub(crate) struct ChartArena<S> {
    diagonal: DiagonalChart<S>,
    levels:   Vec<Chart<S>>,
}

impl<S: Semiring> ChartArena<S> {
    pub(crate) fn new(diagonal: DiagonalChart<S>, first: Chart<S>) -> Self {
        ChartArena {
            diagonal,
            levels: vec![first],
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, chart: Chart<S>) {
        self.levels.push(chart);
    }

    /// Number of levels, including level zero.
    #[inline]
    pub(crate) fn depth(&self) -> usize {
        self.levels.len() + 1
    }

    #[inline]
    pub(crate) fn diagonal(&self) -> &DiagonalChart<S> {
        &self.diagonal
    }

    /// The chart of `level`, which must be at least one.
    #[cfg(test)]
    pub(crate) fn level(&self, level: usize) -> Option<&Chart<S>> {
        level.checked_sub(1).and_then(|l| self.levels.get(l))
    }

    /// The most recently built chart. After the last merge this has a single
    /// position covering every diagonal.
    #[inline]
    pub(crate) fn top(&self) -> &Chart<S> {
        // `levels` is never empty
        &self.levels[self.levels.len() - 1]
    }
}
