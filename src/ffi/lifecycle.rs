//! Simulation creation, destruction, and basic queries.

use crate::automaton::Simulation;
use crate::config::LatticeConfig;

/// Creates a new seeded simulation and returns an opaque pointer.
///
/// `use_seed != 0` makes the run reproducible from `seed`; otherwise the
/// lattice is seeded from entropy. `num_threads == 0` means one thread.
///
/// # Returns
/// A pointer to a new Simulation, or null if the dimension is not positive or
/// the probability is outside [0, 1].
///
/// # Safety
/// The returned pointer must eventually be freed with `ll_destroy()`.
#[no_mangle]
pub extern "C" fn ll_create(
    dimension: i32,
    alive_probability: f64,
    seed: u64,
    use_seed: u8,
    num_threads: u8,
) -> *mut Simulation {
    if dimension <= 0 {
        tracing::warn!(dimension, "Rejected non-positive dimension");
        return std::ptr::null_mut();
    }

    let config = LatticeConfig {
        dimension: dimension as usize,
        initial_alive_probability: alive_probability,
        seed: (use_seed != 0).then_some(seed),
        num_threads: num_threads as usize,
        ..LatticeConfig::default()
    };

    match Simulation::new(config) {
        Ok(sim) => Box::into_raw(Box::new(sim)),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to create simulation");
            std::ptr::null_mut()
        }
    }
}

/// Destroys a simulation and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `ll_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn ll_destroy(ptr: *mut Simulation) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the current generation counter.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn ll_get_generation(ptr: *const Simulation) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation()
}

/// Gets the lattice side length.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
///
/// # Returns
/// The side length, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn ll_get_dimension(ptr: *const Simulation) -> i32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).lattice().dimension() as i32
}

/// Installs the default log subscriber. Safe to call repeatedly.
#[no_mangle]
pub extern "C" fn ll_init_logging() {
    crate::logging::init_logging();
}
