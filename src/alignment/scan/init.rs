use crate::{
    alignment::{
        ScanShape,
        chart::{Chart, DiagonalChart, Drift},
    },
    semiring::Semiring,
};

/// Places the potentials of every lattice cell with `i < len` at its rotated
/// coordinate. `cell(i, j)` gives the potentials of the moves into `(i, j)`
/// in [`Move`](crate::alignment::Move) order, which is also [`Drift`] order.
pub(crate) fn diagonal_chart<S, F>(shape: ScanShape, len: usize, cell: F) -> DiagonalChart<S>
where
    S: Semiring,
    F: Fn(usize, usize) -> [S; 3], {
    let mut chart = DiagonalChart::new(shape.bin);
    for i in 0..len {
        for j in 0..shape.m {
            let at = shape.rotate(i, j);
            chart.set_cell(at.x, at.y, cell(i, j));
        }
    }
    chart
}

/// Pairs up neighboring diagonals `2p` and `2p + 1` into level-one blocks.
///
/// Within a block, a row holds a cell on at most one of the two diagonals, so
/// a fragment either stays on its row (visiting one cell) or takes a single
/// [`Drift::Down`] or [`Drift::Up`] step from the even diagonal to the odd
/// one. Blocks from the boundary point onward lie past the last cell and hold
/// the identity.
pub(crate) fn first_level<S: Semiring>(shape: ScanShape, diagonal: &DiagonalChart<S>, len: usize) -> Chart<S> {
    let bin = diagonal.bin();
    let point = shape.boundary_point(len);
    let mut chart = Chart::new(shape.level_width(1), bin);

    for pos in 0..point {
        let (even, odd) = (2 * pos, 2 * pos + 1);

        for y in 0..bin {
            let mid = S::sum(&[diagonal.get(even, y, Drift::Mid), diagonal.get(odd, y, Drift::Mid)]);
            let values = [diagonal.get(even, y, Drift::Down), mid, diagonal.get(even, y, Drift::Up)];
            chart.broadcast(pos, y, y, values);
        }

        for y in 0..bin - 1 {
            // Insert from row y on the even diagonal to row y + 1 on the odd
            let step = diagonal.get(odd, y + 1, Drift::Down);
            let values = Drift::ALL.map(|d| diagonal.get(even, y, d).mul(step));
            chart.broadcast(pos, y + 1, y, values);

            // Delete from row y + 1 on the even diagonal to row y on the odd
            let step = diagonal.get(odd, y, Drift::Up);
            let values = Drift::ALL.map(|d| diagonal.get(even, y + 1, d).mul(step));
            chart.broadcast(pos, y, y + 1, values);
        }
    }

    chart.identity_fill(point);
    chart
}
