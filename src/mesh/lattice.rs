use bevy::math::Vec2;

/// Index geometry of the cloth lattice.
///
/// `xcount` and `ycount` are *cell* counts, so the lattice holds
/// `(xcount + 1) * (ycount + 1)` points. Points are flattened column-major:
/// the index increases fastest along the y axis, so one column occupies
/// `ycount + 1` consecutive indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lattice {
    pub xcount: usize,
    pub ycount: usize,
}

impl Lattice {
    pub fn new(xcount: usize, ycount: usize) -> Self {
        Self { xcount, ycount }
    }

    /// Total number of lattice points.
    pub fn point_count(&self) -> usize {
        (self.xcount + 1) * (self.ycount + 1)
    }

    /// Index distance between the same row in two neighbouring columns.
    pub fn column_stride(&self) -> usize {
        self.ycount + 1
    }

    pub fn column_of(&self, index: usize) -> usize {
        index / self.column_stride()
    }

    pub fn row_of(&self, index: usize) -> usize {
        index % self.column_stride()
    }

    /// Initial point positions, in lattice index order: a regular grid of
    /// `width x height` starting at `origin`.
    pub fn positions(&self, origin: Vec2, width: f32, height: f32) -> Vec<Vec2> {
        let dx = width / self.xcount as f32;
        let dy = height / self.ycount as f32;
        let mut points = Vec::with_capacity(self.point_count());
        for col in 0..=self.xcount {
            for row in 0..=self.ycount {
                points.push(Vec2::new(
                    origin.x + dx * col as f32,
                    origin.y + dy * row as f32,
                ));
            }
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_maps_back_to_column_and_row() {
        let lat = Lattice::new(4, 2);
        for i in 0..lat.point_count() {
            let (col, row) = (lat.column_of(i), lat.row_of(i));
            assert_eq!(col * lat.column_stride() + row, i);
            assert!(col <= 4 && row <= 2);
        }
    }

    #[test]
    fn positions_follow_the_grid_formula() {
        let lat = Lattice::new(2, 2);
        let pts = lat.positions(Vec2::new(10.0, 20.0), 200.0, 100.0);
        assert_eq!(pts.len(), 9);
        // Column-major: index 1 is one row up, index 3 is one column over.
        assert_eq!(pts[0], Vec2::new(10.0, 20.0));
        assert_eq!(pts[1], Vec2::new(10.0, 70.0));
        assert_eq!(pts[3], Vec2::new(110.0, 20.0));
        assert_eq!(pts[8], Vec2::new(210.0, 120.0));
    }

    #[test]
    fn positions_are_idempotent() {
        let lat = Lattice::new(30, 30);
        let origin = Vec2::new(-100.0, -80.0);
        let a = lat.positions(origin, 200.0, 100.0);
        let b = lat.positions(origin, 200.0, 100.0);
        assert_eq!(a, b);
    }
}
