//! Cell queries and blocking steps.

use crate::automaton::Simulation;

/// Gets the state of a cell (0 = dead, 1 = alive).
///
/// Coordinates wrap around the torus, so -1 reads the last plane.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
///
/// # Returns
/// 0 if null pointer or dead; 1 if alive.
#[no_mangle]
pub unsafe extern "C" fn ll_get_cell(ptr: *const Simulation, x: i32, y: i32, z: i32) -> u8 {
    if ptr.is_null() {
        return 0;
    }

    let sim = &*ptr;
    u8::from(sim.lattice().is_alive(x as isize, y as isize, z as isize))
}

/// Number of alive cells in the current generation.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
#[no_mangle]
pub unsafe extern "C" fn ll_alive_count(ptr: *const Simulation) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).lattice().alive_count() as u64
}

/// Advances the automaton by one generation (finishing an in-progress
/// incremental step if there is one). Observers are notified before this
/// returns.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
///
/// # Returns
/// Number of cells whose liveness changed, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn ll_step(ptr: *mut Simulation) -> u64 {
    if ptr.is_null() {
        return 0;
    }

    let sim = &mut *ptr;
    sim.step_blocking().len() as u64
}
