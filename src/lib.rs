#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::wildcard_imports,
    clippy::enum_glob_use,
    clippy::too_many_arguments,
    clippy::many_single_char_names
)]

/// Semiring alignment by diagonal scan, with validation and a brute-force
/// reference.
pub mod alignment;
/// Semirings for aggregating alignment paths.
pub mod semiring;
/// Mathematical utilities for floating point values.
pub mod math;

/// Generate random alignment instances.
#[cfg(feature = "rand")]
pub mod generate;

#[cfg(feature = "fuzzing")]
pub mod arbitrary;

pub(crate) mod private {
    /// Seals [`Float`](crate::math::Float) to the primitive floating point
    /// types.
    pub trait Sealed {}
}

/// Common structures and traits re-exported
pub mod prelude {
    pub use crate::alignment::{
        Alignment, AlignmentError, AlignmentMode, AlignmentPath, EdgePotentials, Enumeration, Move, Scan,
    };
    #[cfg(feature = "rand")]
    pub use crate::generate::{rand_lengths, rand_local_potentials, rand_potentials};
    pub use crate::semiring::{Entropy, KMax, Log, LogDual, Max, Real, Semiring};
}
