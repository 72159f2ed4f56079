//! Coordinates of the rotated lattice.
//!
//! Lattice cell `(i, j)` lies on anti-diagonal `x = i + j` at row
//! `y = j - i + N`. Every move advances `x` by one or two, so the scan runs
//! along `x`. A row is reachable on diagonal `x` only if `y ≡ x + N (mod 2)`.

/// A cell of the rotated lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DiagonalCoord {
    /// The anti-diagonal, `i + j`
    pub x: usize,
    /// The row, `j - i + N`
    pub y: usize,
}

/// Sizing of the diagonal scan for a lattice of `N` by `M` cells.
///
/// Both the number of diagonals and the number of rows are padded to
/// `bin = 2^levels`, which is at least `N + M`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanShape {
    pub n:      usize,
    pub m:      usize,
    /// Number of levels in the scan tree, `⌈log₂(N + M)⌉`
    pub levels: usize,
    /// Padded width of the diagonal and row axes
    pub bin:    usize,
}

impl ScanShape {
    /// The scan sizing for a lattice with `n` rows and `m` columns. Both must be
    /// at least one.
    #[must_use]
    pub fn new(n: usize, m: usize) -> Self {
        debug_assert!(n > 0 && m > 0);
        let levels = ceil_log2(n + m);
        ScanShape {
            n,
            m,
            levels,
            bin: 1 << levels,
        }
    }

    /// Maps lattice cell `(i, j)` to its diagonal and row.
    #[inline]
    #[must_use]
    pub fn rotate(&self, i: usize, j: usize) -> DiagonalCoord {
        DiagonalCoord {
            x: i + j,
            y: j + self.n - i,
        }
    }

    /// The diagonal of the last cell `(len - 1, M - 1)`.
    #[inline]
    #[must_use]
    pub fn last_diagonal(&self, len: usize) -> usize {
        len + self.m - 2
    }

    /// The first level-one block past the end of a sequence of length `len`.
    /// Blocks from here on hold the identity.
    #[inline]
    #[must_use]
    pub fn boundary_point(&self, len: usize) -> usize {
        self.last_diagonal(len) / 2 + 1
    }

    /// The row of cell `(0, 0)`, where global paths start.
    #[inline]
    #[must_use]
    pub fn start_row(&self) -> usize {
        self.n
    }

    /// The row of cell `(len - 1, M - 1)`, where global paths end.
    #[inline]
    #[must_use]
    pub fn end_row(&self, len: usize) -> usize {
        self.rotate(len - 1, self.m - 1).y
    }

    /// Number of blocks at `level`. Level zero has one block per diagonal.
    #[inline]
    #[must_use]
    pub fn level_width(&self, level: usize) -> usize {
        self.bin >> level
    }
}

/// `⌈log₂(x)⌉` for `x ≥ 1`.
#[inline]
#[must_use]
pub fn ceil_log2(x: usize) -> usize {
    if x <= 1 {
        0
    } else {
        (usize::BITS - (x - 1).leading_zeros()) as usize
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ceil_log2_small() {
        let expected = [0, 0, 1, 2, 2, 3, 3, 3, 3, 4];
        for (x, e) in expected.into_iter().enumerate().skip(1) {
            assert_eq!(ceil_log2(x), e, "x = {x}");
        }
        assert_eq!(ceil_log2(1 << 20), 20);
        assert_eq!(ceil_log2((1 << 20) + 1), 21);
    }

    #[test]
    fn sizing() {
        let shape = ScanShape::new(2, 2);
        assert_eq!((shape.levels, shape.bin), (2, 4));

        let shape = ScanShape::new(5, 3);
        assert_eq!((shape.levels, shape.bin), (3, 8));
        assert_eq!(shape.level_width(0), 8);
        assert_eq!(shape.level_width(1), 4);
        assert_eq!(shape.level_width(3), 1);

        let shape = ScanShape::new(1, 1);
        assert_eq!((shape.levels, shape.bin), (1, 2));
    }

    #[test]
    fn rotation() {
        let shape = ScanShape::new(3, 4);
        assert_eq!(shape.rotate(0, 0), DiagonalCoord { x: 0, y: 3 });
        assert_eq!(shape.rotate(2, 0), DiagonalCoord { x: 2, y: 1 });
        assert_eq!(shape.rotate(0, 3), DiagonalCoord { x: 3, y: 6 });
        assert_eq!(shape.rotate(2, 3), DiagonalCoord { x: 5, y: 4 });
        assert_eq!(shape.start_row(), 3);
        assert_eq!(shape.end_row(3), 4);
        assert_eq!(shape.end_row(1), 6);

        // Rows all fit in the padded axis
        for i in 0..3 {
            for j in 0..4 {
                let c = shape.rotate(i, j);
                assert!(c.x < shape.bin && c.y < shape.bin);
                assert_eq!(c.y % 2, (c.x + shape.n) % 2);
            }
        }
    }

    #[test]
    fn boundary_point_is_half_of_the_span() {
        for n in 1..8 {
            for m in 1..8 {
                let shape = ScanShape::new(n, m);
                for len in 1..=n {
                    let point = shape.boundary_point(len);
                    assert_eq!(point, (len + m) / 2);
                    assert!(point <= shape.level_width(1));
                    // The pair holding the last diagonal is kept
                    assert!(2 * point > shape.last_diagonal(len));
                }
            }
        }
    }
}
