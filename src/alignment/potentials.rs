use crate::{
    alignment::ShapeError,
    math::{NearlyEqual, NearlyEqualMethod},
};
use std::ops::{Index, IndexMut};

/// The three moves of the alignment lattice. The discriminant is the index of
/// the move along the trailing axis of [`EdgePotentials`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    /// Advance the second sequence only (`j + 1`)
    Insert = 0,
    /// Advance both sequences (`i + 1`, `j + 1`)
    Match  = 1,
    /// Advance the first sequence only (`i + 1`)
    Delete = 2,
}

impl Move {
    /// All moves, in axis order.
    pub const ALL: [Move; 3] = [Move::Insert, Move::Match, Move::Delete];

    /// The CIGAR-style operation for the move.
    #[inline]
    #[must_use]
    pub fn to_op(self) -> u8 {
        match self {
            Move::Insert => b'I',
            Move::Match => b'M',
            Move::Delete => b'D',
        }
    }
}

impl From<usize> for Move {
    #[inline]
    fn from(value: usize) -> Self {
        // WARNING: enum order must be maintained
        Move::ALL[value]
    }
}

impl From<Move> for usize {
    #[inline]
    fn from(value: Move) -> Self {
        value as usize
    }
}

/// A dense `[batch, N, M, 3]` tensor of per-edge values.
///
/// Entry `(b, i, j, op)` is the weight of the move `op` landing on lattice cell
/// `(i, j)` of batch element `b`. The same container holds raw potentials,
/// semiring-converted potentials, and marginals.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgePotentials<V> {
    cells: Vec<[V; 3]>,
    batch: usize,
    n:     usize,
    m:     usize,
}

impl<V> EdgePotentials<V> {
    /// Builds the tensor from per-cell triples in row-major `(b, i, j)` order.
    ///
    /// ## Errors
    ///
    /// Returns [`ShapeError::EmptyAxis`] if any axis is zero,
    /// [`ShapeError::TooLarge`] if `batch * n * m * 3` overflows, and
    /// [`ShapeError::DataLength`] if `cells` does not hold `batch * n * m`
    /// triples.
    pub fn from_cells(cells: Vec<[V; 3]>, batch: usize, n: usize, m: usize) -> Result<Self, ShapeError> {
        let expected = cell_count(batch, n, m)?;
        if cells.len() != expected {
            return Err(ShapeError::DataLength {
                expected,
                found: cells.len(),
            });
        }

        Ok(Self { cells, batch, n, m })
    }

    /// Builds the tensor by calling `f(b, i, j)` for every cell.
    ///
    /// ## Errors
    ///
    /// Returns [`ShapeError::EmptyAxis`] if any axis is zero and
    /// [`ShapeError::TooLarge`] if the shape overflows.
    pub fn from_fn<F>(batch: usize, n: usize, m: usize, mut f: F) -> Result<Self, ShapeError>
    where
        F: FnMut(usize, usize, usize) -> [V; 3], {
        let mut cells = Vec::with_capacity(cell_count(batch, n, m)?);
        for b in 0..batch {
            for i in 0..n {
                for j in 0..m {
                    cells.push(f(b, i, j));
                }
            }
        }
        Self::from_cells(cells, batch, n, m)
    }

    /// The shape `[batch, N, M, 3]`.
    #[inline]
    #[must_use]
    pub fn shape(&self) -> [usize; 4] {
        [self.batch, self.n, self.m, 3]
    }

    #[inline]
    #[must_use]
    pub fn batch(&self) -> usize {
        self.batch
    }

    /// The padded length of the first sequence.
    #[inline]
    #[must_use]
    pub fn n(&self) -> usize {
        self.n
    }

    /// The length of the second sequence.
    #[inline]
    #[must_use]
    pub fn m(&self) -> usize {
        self.m
    }

    #[inline]
    fn flat(&self, b: usize, i: usize, j: usize) -> usize {
        debug_assert!(b < self.batch && i < self.n && j < self.m);
        (b * self.n + i) * self.m + j
    }

    /// The three move values of lattice cell `(i, j)` in batch element `b`.
    #[inline]
    #[must_use]
    pub fn get(&self, b: usize, i: usize, j: usize) -> &[V; 3] {
        &self.cells[self.flat(b, i, j)]
    }

    #[inline]
    pub fn get_mut(&mut self, b: usize, i: usize, j: usize) -> &mut [V; 3] {
        let idx = self.flat(b, i, j);
        &mut self.cells[idx]
    }

    /// Iterates over `((b, i, j), values)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize, usize), &[V; 3])> {
        let (n, m) = (self.n, self.m);
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, cell)| ((idx / (n * m), (idx / m) % n, idx % m), cell))
    }

    /// Applies `f` to every value, keeping the shape.
    #[must_use]
    pub fn map<W, F>(&self, mut f: F) -> EdgePotentials<W>
    where
        V: Copy,
        F: FnMut(V) -> W, {
        EdgePotentials {
            cells: self.cells.iter().map(|cell| cell.map(&mut f)).collect(),
            batch: self.batch,
            n:     self.n,
            m:     self.m,
        }
    }
}

impl<V: Copy> EdgePotentials<V> {
    /// Builds the tensor from a flat row-major buffer with the given
    /// `[batch, N, M, 3]` shape.
    ///
    /// ## Errors
    ///
    /// Returns [`ShapeError::MoveAxis`] if the trailing axis is not 3, along
    /// with the errors of [`EdgePotentials::from_cells`].
    pub fn new(values: &[V], shape: [usize; 4]) -> Result<Self, ShapeError> {
        let [batch, n, m, moves] = shape;
        if moves != 3 {
            return Err(ShapeError::MoveAxis(moves));
        }

        let expected = cell_count(batch, n, m)? * 3;
        if values.len() != expected {
            return Err(ShapeError::DataLength {
                expected,
                found: values.len(),
            });
        }

        let cells = values.chunks_exact(3).map(|c| [c[0], c[1], c[2]]).collect();
        Self::from_cells(cells, batch, n, m)
    }

    /// Builds a tensor with every value set to `value`.
    ///
    /// ## Errors
    ///
    /// Returns [`ShapeError::EmptyAxis`] if any axis is zero and
    /// [`ShapeError::TooLarge`] if the shape overflows.
    pub fn filled(batch: usize, n: usize, m: usize, value: V) -> Result<Self, ShapeError> {
        Self::from_cells(vec![[value; 3]; cell_count(batch, n, m)?], batch, n, m)
    }
}

/// The number of lattice cells in a `[batch, N, M, 3]` tensor. The count of
/// individual values, three per cell, must also fit in a `usize`.
fn cell_count(batch: usize, n: usize, m: usize) -> Result<usize, ShapeError> {
    if batch == 0 || n == 0 || m == 0 {
        return Err(ShapeError::EmptyAxis([batch, n, m]));
    }

    batch
        .checked_mul(n)
        .and_then(|c| c.checked_mul(m))
        .filter(|c| c.checked_mul(3).is_some())
        .ok_or(ShapeError::TooLarge([batch, n, m]))
}

impl<V> Index<(usize, usize, usize, Move)> for EdgePotentials<V> {
    type Output = V;

    #[inline]
    fn index(&self, (b, i, j, op): (usize, usize, usize, Move)) -> &Self::Output {
        &self.get(b, i, j)[op as usize]
    }
}

impl<V> IndexMut<(usize, usize, usize, Move)> for EdgePotentials<V> {
    #[inline]
    fn index_mut(&mut self, (b, i, j, op): (usize, usize, usize, Move)) -> &mut Self::Output {
        &mut self.get_mut(b, i, j)[op as usize]
    }
}

impl<T, V: NearlyEqual<T>> NearlyEqual<T> for EdgePotentials<V> {
    fn nearly_equal<M: NearlyEqualMethod<T>>(&self, b: &Self, method: &M) -> (bool, Option<(T, T)>) {
        if self.shape() == b.shape() {
            self.cells.nearly_equal(&b.cells, method)
        } else {
            (false, None)
        }
    }
}
