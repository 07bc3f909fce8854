use super::lattice::Lattice;

/// Serpentine index walk over the lattice.
///
/// Starting at index 0, the walk repeatedly steps by `stride` along the minor
/// axis; after `minor + 1` visits it has hit the end of the current lane, so
/// it jumps by `jump` into the next lane and reverses direction. Every visit
/// is lattice-adjacent to the previous one, which is what lets the whole mesh
/// render as a single polyline per axis.
fn serpentine(point_count: usize, minor: usize, jump: usize, stride: isize) -> Vec<usize> {
    let mut order = Vec::with_capacity(point_count);
    let mut current = 0isize;
    let mut along = 0usize;
    let mut dir = stride;

    for _ in 0..point_count {
        order.push(current as usize);
        if along == minor {
            current += jump as isize;
            along = 0;
            dir = -dir;
        } else {
            along += 1;
            current += dir;
        }
    }
    order
}

/// Down one column, across, up the next: the column-axis visit order.
pub fn zigzag_columns(lattice: &Lattice) -> Vec<usize> {
    serpentine(
        lattice.point_count(),
        lattice.ycount,
        lattice.column_stride(),
        1,
    )
}

/// Across one row, up, back along the next: the row-axis visit order.
pub fn zigzag_rows(lattice: &Lattice) -> Vec<usize> {
    serpentine(
        lattice.point_count(),
        lattice.xcount,
        1,
        lattice.column_stride() as isize,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_is_permutation(order: &[usize], count: usize) {
        let mut sorted = order.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..count).collect::<Vec<_>>());
    }

    fn assert_adjacent(order: &[usize], lattice: &Lattice) {
        for pair in order.windows(2) {
            let offset = pair[0].abs_diff(pair[1]);
            assert!(
                offset == 1 || offset == lattice.column_stride(),
                "{} -> {} is not lattice-adjacent",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn three_by_three_exact_orders() {
        let lat = Lattice::new(2, 2);
        assert_eq!(zigzag_columns(&lat), vec![0, 1, 2, 5, 4, 3, 6, 7, 8]);
        assert_eq!(zigzag_rows(&lat), vec![0, 3, 6, 7, 4, 1, 2, 5, 8]);
    }

    #[test]
    fn both_orders_visit_every_point_once() {
        for (x, y) in [(1, 1), (2, 5), (5, 2), (30, 30)] {
            let lat = Lattice::new(x, y);
            assert_is_permutation(&zigzag_columns(&lat), lat.point_count());
            assert_is_permutation(&zigzag_rows(&lat), lat.point_count());
        }
    }

    #[test]
    fn consecutive_visits_are_lattice_adjacent() {
        for (x, y) in [(1, 1), (2, 5), (5, 2), (7, 3)] {
            let lat = Lattice::new(x, y);
            assert_adjacent(&zigzag_columns(&lat), &lat);
            assert_adjacent(&zigzag_rows(&lat), &lat);
        }
    }
}
