//! Region extraction for hosts that mirror liveness into their own scene.

use super::grid::index_of;
use crate::state::Lattice;

/// Extract the half-open box `[min, max)` of the current generation into a
/// flat buffer.
///
/// # Layout
/// The buffer is filled in z,y,x order (z changes slowest, x changes fastest),
/// one byte per cell: 0 = dead, 1 = alive. Bounds are clamped to the lattice;
/// the box does not wrap.
///
/// # Returns
/// Number of bytes written, or 0 for an empty box or a too-small buffer.
pub fn extract_region(
    lattice: &Lattice,
    out_buf: &mut [u8],
    min: [i64; 3],
    max: [i64; 3],
) -> usize {
    let n = lattice.dimension() as i64;
    let clamp = |v: i64| v.clamp(0, n) as usize;

    let [min_x, min_y, min_z] = min.map(clamp);
    let [max_x, max_y, max_z] = max.map(clamp);

    // Check for empty region
    if min_x >= max_x || min_y >= max_y || min_z >= max_z {
        return 0;
    }

    let total_size = (max_x - min_x) * (max_y - min_y) * (max_z - min_z);
    if out_buf.len() < total_size {
        return 0;
    }

    let cells = lattice.cells();
    let dimension = lattice.dimension();
    let mut offset = 0;
    for z in min_z..max_z {
        for y in min_y..max_y {
            let row = index_of(dimension, min_x, y, z);
            let len = max_x - min_x;
            out_buf[offset..offset + len].copy_from_slice(&cells[row..row + len]);
            offset += len;
        }
    }

    offset
}
