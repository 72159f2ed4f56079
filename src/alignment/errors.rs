use crate::alignment::Move;
use std::{error::Error, fmt};

/// An enum representing the errors that can happen when validating edge
/// potentials and sequence lengths for an alignment scan.
///
/// All of these are detected before any chart is allocated.
#[derive(PartialEq, Eq)]
#[non_exhaustive]
pub enum AlignmentError {
    /// The potential tensor was malformed
    Shape(ShapeError),
    /// A local alignment potential had the wrong sign
    Constraint(ConstraintError),
    /// The length vector was invalid
    Length(LengthError),
}

impl fmt::Display for AlignmentError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AlignmentError::Shape(e) => write!(f, "{e}"),
            AlignmentError::Constraint(e) => write!(f, "{e}"),
            AlignmentError::Length(e) => write!(f, "{e}"),
        }
    }
}

impl fmt::Debug for AlignmentError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Error for AlignmentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AlignmentError::Shape(e) => Some(e),
            AlignmentError::Constraint(e) => Some(e),
            AlignmentError::Length(e) => Some(e),
        }
    }
}

impl From<ShapeError> for AlignmentError {
    #[inline]
    fn from(e: ShapeError) -> Self {
        AlignmentError::Shape(e)
    }
}

impl From<ConstraintError> for AlignmentError {
    #[inline]
    fn from(e: ConstraintError) -> Self {
        AlignmentError::Constraint(e)
    }
}

impl From<LengthError> for AlignmentError {
    #[inline]
    fn from(e: LengthError) -> Self {
        AlignmentError::Length(e)
    }
}

/// Malformed rank or axis sizes of an edge potential tensor.
#[derive(PartialEq, Eq)]
#[non_exhaustive]
pub enum ShapeError {
    /// The trailing move axis did not have size 3
    MoveAxis(usize),
    /// The batch, first sequence, or second sequence axis was empty
    EmptyAxis([usize; 3]),
    /// The number of values did not match the shape
    DataLength { expected: usize, found: usize },
    /// The number of values in the shape overflows `usize`
    TooLarge([usize; 3]),
}

impl fmt::Display for ShapeError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ShapeError::MoveAxis(size) => write!(f, "The move axis must have size 3 but had size {size}!"),
            ShapeError::EmptyAxis([batch, n, m]) => {
                write!(f, "The potentials must be non-empty but had shape ({batch}, {n}, {m}, 3)!")
            }
            ShapeError::DataLength { expected, found } => {
                write!(f, "Expected {expected} potentials for the given shape but found {found}!")
            }
            ShapeError::TooLarge([batch, n, m]) => {
                write!(f, "The shape ({batch}, {n}, {m}, 3) holds more potentials than can be addressed!")
            }
        }
    }
}

impl fmt::Debug for ShapeError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Error for ShapeError {}

/// A sign violation in local alignment mode: skips (insertions and deletions)
/// must be non-positive and matches must be non-negative.
#[derive(PartialEq, Eq)]
pub struct ConstraintError {
    /// The batch element holding the offending potential
    pub batch: usize,
    /// The lattice row (first sequence index) of the offending potential
    pub row:   usize,
    /// The lattice column (second sequence index) of the offending potential
    pub col:   usize,
    /// The move type of the offending potential
    pub op:    Move,
}

impl fmt::Display for ConstraintError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let ConstraintError { batch, row, col, op } = self;
        let rule = match op {
            Move::Match => "matches must be non-negative",
            Move::Insert | Move::Delete => "skips must be non-positive",
        };
        write!(
            f,
            "Local alignment requires that {rule}, violated by the {op:?} potential at batch {batch}, cell ({row}, {col})!"
        )
    }
}

impl fmt::Debug for ConstraintError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Error for ConstraintError {}

/// An invalid length vector.
#[derive(PartialEq, Eq)]
#[non_exhaustive]
pub enum LengthError {
    /// The number of lengths did not match the batch size
    Count { expected: usize, found: usize },
    /// A batch element had length zero
    Empty { batch: usize },
    /// A length exceeded the first sequence axis of the potentials
    TooLong { batch: usize, length: usize, max: usize },
    /// No length reached the first sequence axis of the potentials
    NoFullLength { max: usize },
}

impl fmt::Display for LengthError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LengthError::Count { expected, found } => {
                write!(f, "Expected one length per batch element ({expected}) but found {found}!")
            }
            LengthError::Empty { batch } => write!(f, "Batch element {batch} has length zero!"),
            LengthError::TooLong { batch, length, max } => write!(
                f,
                "Batch element {batch} has length {length}, which is longer than the edge scores ({max})!"
            ),
            LengthError::NoFullLength { max } => write!(f, "At least one length must equal {max}!"),
        }
    }
}

impl fmt::Debug for LengthError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Error for LengthError {}
