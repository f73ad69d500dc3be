//! Region extraction FFI function.

use crate::automaton::{self, Simulation};

/// Extracts a box of cells from the current generation into a flat buffer.
///
/// # Layout
/// The buffer is filled in z,y,x order (z changes slowest, x changes fastest).
/// Bounds are half-open and clamped to the lattice.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
/// - `out_buf` must point to at least `out_len` writable bytes, or be null
///
/// # Returns
/// Number of bytes written, or 0 on error (null pointers, empty box, or
/// `out_len` smaller than the clamped box).
#[no_mangle]
pub unsafe extern "C" fn ll_extract_region(
    ptr: *const Simulation,
    out_buf: *mut u8,
    out_len: u64,
    min_x: i32,
    min_y: i32,
    min_z: i32,
    max_x: i32,
    max_y: i32,
    max_z: i32,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let sim = &*ptr;
    let buf_slice = std::slice::from_raw_parts_mut(out_buf, out_len as usize);
    automaton::extract_region(
        sim.lattice(),
        buf_slice,
        [min_x as i64, min_y as i64, min_z as i64],
        [max_x as i64, max_y as i64, max_z as i64],
    ) as u64
}
