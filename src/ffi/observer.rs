//! Callback registration so the host is told about liveness instead of polling.

use std::ffi::c_void;

use crate::automaton::Simulation;
use crate::observer::LivenessObserver;
use crate::state::Coord;

/// Host callback: `(user_data, x, y, z, alive)` with `alive` 0 or 1.
pub type CellCallback = extern "C" fn(*mut c_void, i32, i32, i32, u8);

/// Forwards every notification to a C callback. Initial and changed cells use
/// the same callback; the host only needs to toggle visibility.
struct CallbackObserver {
    callback: CellCallback,
    user_data: *mut c_void,
}

impl CallbackObserver {
    fn emit(&self, coord: Coord, alive: bool) {
        (self.callback)(
            self.user_data,
            coord.x as i32,
            coord.y as i32,
            coord.z as i32,
            u8::from(alive),
        );
    }
}

impl LivenessObserver for CallbackObserver {
    fn cell_initialized(&mut self, coord: Coord, alive: bool) {
        self.emit(coord, alive);
    }

    fn cell_changed(&mut self, coord: Coord, alive: bool) {
        self.emit(coord, alive);
    }
}

/// Registers `callback` and immediately calls it once per cell with the
/// current liveness. Later steps call it for changed cells only.
/// A null callback clears the observer.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
/// - `user_data` is passed back untouched and must stay valid for as long as
///   the callback is registered
///
/// # Returns
/// 0 on success, -1 if null pointer.
#[no_mangle]
pub unsafe extern "C" fn ll_set_observer(
    ptr: *mut Simulation,
    callback: Option<CellCallback>,
    user_data: *mut c_void,
) -> i32 {
    if ptr.is_null() {
        return -1;
    }

    let sim = &mut *ptr;
    match callback {
        Some(callback) => sim.set_observer(Box::new(CallbackObserver {
            callback,
            user_data,
        })),
        None => {
            sim.clear_observer();
        }
    }
    0
}

/// Removes any registered callback.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
#[no_mangle]
pub unsafe extern "C" fn ll_clear_observer(ptr: *mut Simulation) {
    if ptr.is_null() {
        return;
    }
    (*ptr).clear_observer();
}
