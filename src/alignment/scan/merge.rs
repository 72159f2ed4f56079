use crate::{
    alignment::chart::{Boundary, Chart, Drift},
    semiring::Semiring,
};
use rayon::prelude::*;

/// Joins neighboring blocks `2p` and `2p + 1` of `prev` into block `p` of the
/// next level.
///
/// A fragment through the joined block leaves the left block at some row and
/// enters the right block with one of the three drifts. The row it enters at
/// is fixed by the drift, so each join is a semiring dot product over the
/// left block's end row. When `local` is set, fragments may also end inside
/// the left block or start inside the right block without touching the other.
///
/// ## Complexity
///
/// `O(bin³)` semiring operations per output block, with blocks filled in
/// parallel. Global merges skip the closed boundaries and do a quarter of the
/// work of local ones.
pub(crate) fn merge<S: Semiring>(prev: &Chart<S>, local: bool) -> Chart<S> {
    let mut next = Chart::new(prev.width() / 2, prev.bin());
    next.par_positions_mut()
        .enumerate()
        .for_each(|(pos, out)| merge_position(prev, 2 * pos, 2 * pos + 1, local, out));
    next
}

fn merge_position<S: Semiring>(prev: &Chart<S>, left: usize, right: usize, local: bool, out: &mut [S]) {
    let bin = prev.bin();
    // Global fragments are never closed, so those entries stay zero
    let bounds: &[Boundary] = if local { &Boundary::ALL } else { &[Boundary::Open] };
    let slot = |row: usize, bound: Boundary, drift: Drift| ((row * 2 + bound as usize) * 3 + drift as usize) * bin;

    // Left block by end row, for every start row, start boundary, and drift,
    // with the end left open
    let mut left_cols = vec![S::zero(); bin * 6 * bin];
    // Right block by start row, for every end row, end boundary, and drift,
    // with the start left open
    let mut right_rows = vec![S::zero(); bin * 6 * bin];

    for row in 0..bin {
        for &bound in bounds {
            for drift in Drift::ALL {
                let at = slot(row, bound, drift);
                for k in 0..bin {
                    left_cols[at + k] = prev.get(left, k, row, Boundary::Open, bound, drift);
                    right_rows[at + k] = prev.get(right, row, k, bound, Boundary::Open, drift);
                }
            }
        }
    }

    for end in 0..bin {
        for start in 0..bin {
            for &end_bound in bounds {
                for &start_bound in bounds {
                    for drift in Drift::ALL {
                        let at = slot(start, start_bound, drift);
                        let col = &left_cols[at..at + bin];

                        let mut terms = [S::zero(); 5];
                        for (term, op) in terms.iter_mut().zip(Drift::ALL) {
                            let at = slot(end, end_bound, op);
                            let row = &right_rows[at..at + bin];
                            *term = match op {
                                Drift::Mid => S::dot(col, row),
                                // Right block entered one row below the left's end
                                Drift::Down => S::dot(&col[..bin - 1], &row[1..]),
                                // Right block entered one row above the left's end
                                Drift::Up => S::dot(&col[1..], &row[..bin - 1]),
                            };
                        }

                        if local {
                            if end_bound == Boundary::Close {
                                terms[3] = prev.get(left, end, start, Boundary::Close, start_bound, drift);
                            }
                            if start_bound == Boundary::Close {
                                terms[4] = prev.get(right, end, start, end_bound, Boundary::Close, drift);
                            }
                        }

                        out[Chart::<S>::local_offset(bin, end, start, end_bound, start_bound, drift)] = S::sum(&terms);
                    }
                }
            }
        }
    }
}
