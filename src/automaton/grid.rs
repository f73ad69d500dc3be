//! Toroidal indexing and neighbor counting.

use crate::state::Coord;

/// Wrap a signed coordinate onto `[0, dimension)`.
#[inline]
pub fn wrap(coord: isize, dimension: usize) -> usize {
    coord.rem_euclid(dimension as isize) as usize
}

/// Calculate the linear index for a 3D coordinate.
#[inline]
pub fn index_of(dimension: usize, x: usize, y: usize, z: usize) -> usize {
    z * dimension * dimension + y * dimension + x
}

/// Inverse of [`index_of`].
#[inline]
pub fn coord_of(dimension: usize, idx: usize) -> Coord {
    let plane = dimension * dimension;
    Coord {
        x: idx % dimension,
        y: (idx / dimension) % dimension,
        z: idx / plane,
    }
}

/// The wrapped `[c - 1, c, c + 1]` along one axis.
#[inline]
fn axis_window(c: usize, dimension: usize) -> [usize; 3] {
    let c = c as isize;
    [
        wrap(c - 1, dimension),
        wrap(c, dimension),
        wrap(c + 1, dimension),
    ]
}

/// Count alive neighbors using the Moore neighborhood (26 neighbors) on a torus.
///
/// Each of the 26 offsets counts on its own, so on lattices narrower than 3
/// the same physical cell can be counted more than once.
pub fn count_neighbors(cells: &[u8], dimension: usize, x: usize, y: usize, z: usize) -> u8 {
    let xs = axis_window(x, dimension);
    let ys = axis_window(y, dimension);
    let zs = axis_window(z, dimension);
    let mut count = 0;

    for (dz, &nz) in zs.iter().enumerate() {
        for (dy, &ny) in ys.iter().enumerate() {
            for (dx, &nx) in xs.iter().enumerate() {
                // Skip the center cell
                if dx == 1 && dy == 1 && dz == 1 {
                    continue;
                }
                count += cells[index_of(dimension, nx, ny, nz)];
            }
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ALIVE;

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(-1, 8), 7);
        assert_eq!(wrap(8, 8), 0);
        assert_eq!(wrap(3, 8), 3);
        assert_eq!(wrap(-17, 8), 7);
        assert_eq!(wrap(-1, 1), 0);
    }

    #[test]
    fn test_index_of() {
        // First cell
        assert_eq!(index_of(4, 0, 0, 0), 0);
        // Last cell
        assert_eq!(index_of(4, 3, 3, 3), 63);
        // Various cells
        assert_eq!(index_of(4, 1, 0, 0), 1);
        assert_eq!(index_of(4, 0, 1, 0), 4);
        assert_eq!(index_of(4, 0, 0, 1), 16);
    }

    #[test]
    fn test_coord_of_inverts_index_of() {
        for idx in 0..125 {
            let c = coord_of(5, idx);
            assert_eq!(index_of(5, c.x, c.y, c.z), idx);
        }
    }

    #[test]
    fn test_count_neighbors() {
        let n = 8;
        let mut cells = vec![0; n * n * n];

        // Cross pattern: center + 4 neighbors
        for (x, y, z) in [(4, 4, 4), (3, 4, 4), (5, 4, 4), (4, 3, 4), (4, 5, 4)] {
            cells[index_of(n, x, y, z)] = ALIVE;
        }

        // Center should have 4 neighbors (left, right, front, back)
        assert_eq!(count_neighbors(&cells, n, 4, 4, 4), 4);

        // Each arm sees the center and the two orthogonal arms
        assert_eq!(count_neighbors(&cells, n, 3, 4, 4), 3);
        assert_eq!(count_neighbors(&cells, n, 4, 5, 4), 3);

        // Far cell should have 0 neighbors
        assert_eq!(count_neighbors(&cells, n, 0, 0, 0), 0);
    }

    #[test]
    fn test_count_neighbors_across_faces() {
        let n = 6;
        let mut cells = vec![0; n * n * n];
        cells[index_of(n, n - 1, 0, 0)] = ALIVE;
        cells[index_of(n, 0, n - 1, 0)] = ALIVE;
        cells[index_of(n, 0, 0, n - 1)] = ALIVE;
        cells[index_of(n, n - 1, n - 1, n - 1)] = ALIVE;

        // The origin's -1 offsets land on index n-1 on each axis.
        assert_eq!(count_neighbors(&cells, n, 0, 0, 0), 4);
        // And index n-1's +1 offsets land back on 0.
        assert_eq!(count_neighbors(&cells, n, n - 1, n - 1, n - 1), 3);
        assert_eq!(count_neighbors(&cells, n, n - 1, n - 1, 0), 4);
        // Interior cells away from the seam see nothing.
        assert_eq!(count_neighbors(&cells, n, 2, 2, 2), 0);
    }

    #[test]
    fn test_count_neighbors_full_lattice() {
        let cells = vec![ALIVE; 27];
        for idx in 0..27 {
            let c = coord_of(3, idx);
            assert_eq!(count_neighbors(&cells, 3, c.x, c.y, c.z), 26);
        }
    }
}
