use crate::{
    alignment::{Alignment, AlignmentError, AlignmentMode, EdgePotentials, Move, check_potentials},
    semiring::Semiring,
};
use std::fmt::Write;

/// One visited lattice cell of an alignment path and the move that entered
/// it. The first step of every path uses [`Move::Match`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PathStep {
    pub row: usize,
    pub col: usize,
    pub op:  Move,
}

/// A monotone path through the alignment lattice, in visiting order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct AlignmentPath(pub Vec<PathStep>);

impl AlignmentPath {
    /// The first visited cell.
    #[inline]
    #[must_use]
    pub fn start(&self) -> Option<(usize, usize)> {
        self.0.first().map(|s| (s.row, s.col))
    }

    /// The last visited cell.
    #[inline]
    #[must_use]
    pub fn end(&self) -> Option<(usize, usize)> {
        self.0.last().map(|s| (s.row, s.col))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the path enters cell `(row, col)` with `op`.
    #[inline]
    #[must_use]
    pub fn uses(&self, row: usize, col: usize, op: Move) -> bool {
        self.0.contains(&PathStep { row, col, op })
    }

    /// The product of the potentials of every step.
    #[must_use]
    pub fn score<S: Semiring>(&self, potentials: &EdgePotentials<S>, batch: usize) -> S {
        self.0
            .iter()
            .fold(S::one(), |acc, s| acc.mul(potentials[(batch, s.row, s.col, s.op)]))
    }

    fn extend(&self, row: usize, col: usize, op: Move) -> Self {
        let mut steps = Vec::with_capacity(self.0.len() + 1);
        steps.extend_from_slice(&self.0);
        steps.push(PathStep { row, col, op });
        AlignmentPath(steps)
    }
}

/// Formats the moves as run-length encoded operations, such as `1M2I1D`.
impl std::fmt::Display for AlignmentPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buff = itoa::Buffer::new();
        let mut steps = self.0.iter().map(|s| s.op).peekable();

        while let Some(op) = steps.next() {
            let mut inc = 1usize;
            while steps.next_if_eq(&op).is_some() {
                inc += 1;
            }
            f.write_str(buff.format(inc))?;
            f.write_char(op.to_op() as char)?;
        }
        Ok(())
    }
}

/// The output of [`Alignment::enumerate`].
#[derive(Clone, Debug)]
pub struct Enumeration<S> {
    /// The semiring sum of every path score, per batch element
    pub aggregate: Vec<S>,
    /// Every path with its score, per batch element
    pub paths:     Vec<Vec<(AlignmentPath, S)>>,
}

impl<S: Semiring> Enumeration<S> {
    /// The highest scoring path of batch element `b`, ranked by
    /// [`Semiring::value`].
    #[must_use]
    pub fn best_path(&self, b: usize) -> Option<&(AlignmentPath, S)> {
        self.paths.get(b)?.iter().fold(None, |best, candidate| match best {
            Some((_, score)) if S::value(*score) >= candidate.1.value() => best,
            _ => Some(candidate),
        })
    }
}

impl<S: Semiring> Alignment<S> {
    /// Lists every alignment path explicitly. This is the brute-force
    /// reference for [`compute`](Alignment::compute) and is only practical for
    /// small lattices.
    ///
    /// Global paths start at `(0, 0)` and end at `(len - 1, M - 1)`. Local paths
    /// may start at any cell and end at any cell reachable from it. Each path's
    /// first cell contributes its [`Move::Match`] potential.
    ///
    /// ## Errors
    ///
    /// The same as [`compute`](Alignment::compute).
    ///
    /// ## Complexity
    ///
    /// The number of paths grows exponentially in `N + M`.
    pub fn enumerate(
        &self, potentials: &EdgePotentials<S::Scalar>, lengths: Option<&[usize]>,
    ) -> Result<Enumeration<S>, AlignmentError> {
        let validated = check_potentials::<S>(potentials, lengths, self.mode())?;
        let converted = validated.potentials();

        let mut aggregate = Vec::with_capacity(validated.batch());
        let mut paths = Vec::with_capacity(validated.batch());

        for (b, &len) in validated.lengths().iter().enumerate() {
            let found = enumerate_element(converted, b, len, self.mode());
            aggregate.push(S::sum(&found.iter().map(|(_, score)| *score).collect::<Vec<_>>()));
            paths.push(found);
        }

        let out = Enumeration { aggregate, paths };

        if self.mode() == AlignmentMode::Local {
            for b in 0..validated.batch() {
                if let Some((path, score)) = out.best_path(b) {
                    log::debug!("best local path for batch {b}: {path} from {:?} ({score:?})", path.start());
                }
            }
        }

        Ok(out)
    }
}

fn enumerate_element<S: Semiring>(
    potentials: &EdgePotentials<S>, b: usize, len: usize, mode: AlignmentMode,
) -> Vec<(AlignmentPath, S)> {
    let m = potentials.m();
    let idx = |i: usize, j: usize| i * m + j;
    let begin = |i: usize, j: usize| {
        (
            AlignmentPath(vec![PathStep {
                row: i,
                col: j,
                op:  Move::Match,
            }]),
            potentials[(b, i, j, Move::Match)],
        )
    };

    // Paths ending at each cell
    let mut table: Vec<Vec<(AlignmentPath, S)>> = vec![Vec::new(); len * m];
    match mode {
        AlignmentMode::Global => table[0].push(begin(0, 0)),
        AlignmentMode::Local => {
            for i in 0..len {
                for j in 0..m {
                    table[idx(i, j)].push(begin(i, j));
                }
            }
        }
    }

    for i in 0..len {
        for j in 0..m {
            let here = std::mem::take(&mut table[idx(i, j)]);
            for (path, score) in &here {
                let mut step = |ni: usize, nj: usize, op: Move| {
                    let next = score.mul(potentials[(b, ni, nj, op)]);
                    table[idx(ni, nj)].push((path.extend(ni, nj, op), next));
                };

                if i + 1 < len && j + 1 < m {
                    step(i + 1, j + 1, Move::Match);
                }
                if i + 1 < len {
                    step(i + 1, j, Move::Delete);
                }
                if j + 1 < m {
                    step(i, j + 1, Move::Insert);
                }
            }
            table[idx(i, j)] = here;
        }
    }

    match mode {
        AlignmentMode::Global => std::mem::take(&mut table[idx(len - 1, m - 1)]),
        AlignmentMode::Local => table.into_iter().flatten().collect(),
    }
}
