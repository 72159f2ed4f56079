//! ## Semiring alignment by diagonal scan
//!
//! An alignment of a first sequence of length `N` with a second of length `M`
//! is a monotone path through an `N × M` lattice. Each step enters a cell
//! `(i, j)` with one of three [`Move`]s, and each move into each cell carries
//! an edge potential. [`Alignment`] aggregates the potentials of all paths
//! under any [`Semiring`], so the same scan yields path counts, log partition
//! functions, best scores, entropies, and edge marginals.
//!
//! Rather than filling the lattice cell by cell, the lattice is rotated 45° so
//! that every move advances along anti-diagonals, and neighboring blocks of
//! diagonals are merged pairwise. This takes `⌈log₂(N + M)⌉` levels, each of
//! which merges all of its blocks in parallel.
//!
//! Two modes are supported:
//!
//! - [`AlignmentMode::Global`]: paths run from `(0, 0)` to `(len - 1, M - 1)`.
//! - [`AlignmentMode::Local`]: paths may start and end at any cell. Skip
//!   potentials must be non-positive and match potentials non-negative.
//!
//! ```
//! use scanalign::{alignment::{Alignment, EdgePotentials}, semiring::{Max, Real}};
//!
//! // Every path through a 2 × 2 lattice has weight one, so the total counts
//! // the paths: the diagonal and the two corners
//! let potentials = EdgePotentials::filled(1, 2, 2, 1.0_f64).unwrap();
//! let counts = Alignment::<Real<f64>>::global().sum(&potentials, None).unwrap();
//! assert_eq!(counts[0], Real(3.0));
//!
//! // Under max-plus the corner paths win with three unit edges
//! let best = Alignment::<Max<f64>>::global().sum(&potentials, None).unwrap();
//! assert_eq!(best[0], Max(3.0));
//! ```
//!
//! [`Semiring`]: crate::semiring::Semiring

use std::marker::PhantomData;

mod chart;
mod enumerate;
mod errors;
mod indexing;
mod marginals;
mod potentials;
mod scan;
mod validate;

pub use enumerate::*;
pub use errors::*;
pub use indexing::*;
pub use potentials::*;
pub use scan::Scan;
pub use validate::*;

/// Which paths through the lattice are aggregated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AlignmentMode {
    /// From the first cell to the last cell of both sequences
    #[default]
    Global,
    /// From any cell to any cell reachable from it
    Local,
}

/// A semiring alignment in a fixed [`AlignmentMode`].
///
/// The semiring `S` is chosen by type, for example `Alignment::<Log<f32>>`.
/// See [`compute`](Alignment::compute), [`enumerate`](Alignment::enumerate),
/// and, for [`LogDual`](crate::semiring::LogDual),
/// [`marginals`](Alignment::marginals).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Alignment<S> {
    mode:     AlignmentMode,
    semiring: PhantomData<fn() -> S>,
}

impl<S> Alignment<S> {
    #[inline]
    #[must_use]
    pub fn new(mode: AlignmentMode) -> Self {
        Alignment {
            mode,
            semiring: PhantomData,
        }
    }

    #[inline]
    #[must_use]
    pub fn global() -> Self {
        Self::new(AlignmentMode::Global)
    }

    #[inline]
    #[must_use]
    pub fn local() -> Self {
        Self::new(AlignmentMode::Local)
    }

    #[inline]
    #[must_use]
    pub fn mode(&self) -> AlignmentMode {
        self.mode
    }
}
