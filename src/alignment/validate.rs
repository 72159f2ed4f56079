use crate::{
    alignment::{AlignmentError, AlignmentMode, ConstraintError, EdgePotentials, LengthError, Move},
    math::Float,
    semiring::Semiring,
};

/// Edge potentials that passed validation, already converted into a
/// semiring, along with one length per batch element.
#[derive(Clone, Debug)]
pub struct Validated<S> {
    potentials: EdgePotentials<S>,
    lengths:    Vec<usize>,
}

impl<S> Validated<S> {
    #[inline]
    #[must_use]
    pub fn batch(&self) -> usize {
        self.potentials.batch()
    }

    #[inline]
    #[must_use]
    pub fn n(&self) -> usize {
        self.potentials.n()
    }

    #[inline]
    #[must_use]
    pub fn m(&self) -> usize {
        self.potentials.m()
    }

    /// The first sequence length of each batch element.
    #[inline]
    #[must_use]
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// The semiring-converted potentials.
    #[inline]
    #[must_use]
    pub fn potentials(&self) -> &EdgePotentials<S> {
        &self.potentials
    }

    #[inline]
    #[must_use]
    pub fn into_potentials(self) -> EdgePotentials<S> {
        self.potentials
    }
}

/// Checks raw edge potentials and lengths for an alignment in `mode`, then
/// converts the potentials into the semiring `S`.
///
/// When `lengths` is `None`, every batch element uses the full first sequence
/// axis `N`. Non-finite potentials are not rejected: an edge with potential
/// `-∞` under [`Log`](crate::semiring::Log) is simply forbidden.
///
/// ## Errors
///
/// * [`ConstraintError`] in local mode if any skip potential is positive or any
///   match potential is negative. Every cell is checked, including cells past
///   a batch element's length.
/// * [`LengthError`] if the number of lengths differs from the batch size, if
///   any length is zero or exceeds `N`, or if no length equals `N`.
pub fn check_potentials<S: Semiring>(
    potentials: &EdgePotentials<S::Scalar>, lengths: Option<&[usize]>, mode: AlignmentMode,
) -> Result<Validated<S>, AlignmentError> {
    if mode == AlignmentMode::Local {
        check_local_signs(potentials)?;
    }

    let lengths = match lengths {
        Some(lengths) => check_lengths(lengths, potentials.batch(), potentials.n())?,
        None => vec![potentials.n(); potentials.batch()],
    };

    Ok(Validated {
        potentials: potentials.map(S::convert),
        lengths,
    })
}

fn check_local_signs<T: Float>(potentials: &EdgePotentials<T>) -> Result<(), ConstraintError> {
    for ((batch, row, col), cell) in potentials.cells() {
        for op in Move::ALL {
            let v = cell[op as usize];
            let violated = match op {
                Move::Match => v < T::ZERO,
                Move::Insert | Move::Delete => v > T::ZERO,
            };

            if violated {
                return Err(ConstraintError { batch, row, col, op });
            }
        }
    }
    Ok(())
}

fn check_lengths(lengths: &[usize], batch: usize, n: usize) -> Result<Vec<usize>, LengthError> {
    if lengths.len() != batch {
        return Err(LengthError::Count {
            expected: batch,
            found:    lengths.len(),
        });
    }

    for (b, &length) in lengths.iter().enumerate() {
        if length == 0 {
            return Err(LengthError::Empty { batch: b });
        }
        if length > n {
            return Err(LengthError::TooLong {
                batch: b,
                length,
                max: n,
            });
        }
    }

    if !lengths.contains(&n) {
        return Err(LengthError::NoFullLength { max: n });
    }

    Ok(lengths.to_vec())
}
