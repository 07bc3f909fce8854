use super::lattice::Lattice;

/// An unordered pair of lattice indices that must be linked by a constraint.
/// Stored as (source, target) with target > source.
pub type Connection = (usize, usize);

/// Derives every structural link of the mesh from index arithmetic alone.
///
/// Every index except the last is a connection source. A source links
/// forward to its next-column neighbour (`i + ycount + 1`), its next-row
/// neighbour (`i + 1`), or both, depending on where it sits:
///
/// 1. bottom of a column (`i % (ycount+1) == ycount`, excluding index 0):
///    only the next column continues;
/// 2. last column (`i >= xcount * (ycount+1)`): only the next row continues;
/// 3. anywhere else: both neighbours exist.
///
/// The cases are tested in that order, and the `i != 0` guard on case 1 is
/// load-bearing: index 0 always emits both links. A full mesh yields exactly
/// `2*xcount*ycount + xcount + ycount` connections.
pub fn connections(lattice: &Lattice) -> Vec<Connection> {
    let stride = lattice.column_stride();
    let mut links =
        Vec::with_capacity(2 * lattice.xcount * lattice.ycount + lattice.xcount + lattice.ycount);

    for i in 0..lattice.point_count() - 1 {
        if i != 0 && lattice.row_of(i) == lattice.ycount {
            links.push((i, i + stride));
        } else if lattice.column_of(i) == lattice.xcount {
            links.push((i, i + 1));
        } else {
            links.push((i, i + stride));
            links.push((i, i + 1));
        }
    }

    debug_assert_eq!(
        links.len(),
        2 * lattice.xcount * lattice.ycount + lattice.xcount + lattice.ycount
    );
    debug_assert!(links.iter().all(|&(_, j)| j < lattice.point_count()));
    links
}
