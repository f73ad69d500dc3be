//! FFI interface for frame-budgeted stepping.

use std::time::Duration;

use crate::automaton::Simulation;

/// Begin a new incremental step.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
///
/// # Returns
/// 0 on success, 1 if a step is already in progress, -1 if null pointer.
#[no_mangle]
pub unsafe extern "C" fn ll_begin_step(ptr: *mut Simulation) -> i32 {
    if ptr.is_null() {
        return -1;
    }

    match (*ptr).begin_step() {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

/// Do bounded work within the given time budget (microseconds).
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
///
/// # Returns
/// 1 if the step completed during this tick, 0 if more work remains,
/// -1 if no step is active or null pointer.
#[no_mangle]
pub unsafe extern "C" fn ll_tick(ptr: *mut Simulation, budget_us: u64) -> i32 {
    if ptr.is_null() {
        return -1;
    }

    let sim = &mut *ptr;
    if !sim.is_stepping() {
        return -1;
    }
    match sim.tick(Duration::from_micros(budget_us)) {
        Some(_) => 1,
        None => 0,
    }
}

/// Query whether a step is currently in progress.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
///
/// # Returns
/// 1 if stepping, 0 if idle, -1 if null pointer.
#[no_mangle]
pub unsafe extern "C" fn ll_is_stepping(ptr: *const Simulation) -> i32 {
    if ptr.is_null() {
        return -1;
    }

    if (*ptr).is_stepping() {
        1
    } else {
        0
    }
}
