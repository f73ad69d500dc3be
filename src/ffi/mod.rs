//! C FFI layer for game-engine integration.
//!
//! This module exports C ABI functions for hosts that load the library as a
//! native plugin. All functions are marked with `#[no_mangle]` and use
//! `extern "C"`.
//!
//! The actual logic is in the `automaton` module. These functions are thin wrappers
//! that handle null checks, pointer safety, and C-to-Rust conversions.

pub mod grid;
pub mod incremental;
pub mod lifecycle;
pub mod observer;
pub mod region;

pub use grid::{ll_alive_count, ll_get_cell, ll_step};
pub use incremental::{ll_begin_step, ll_is_stepping, ll_tick};
pub use lifecycle::{ll_create, ll_destroy, ll_get_dimension, ll_get_generation, ll_init_logging};
pub use observer::{ll_clear_observer, ll_set_observer, CellCallback};
pub use region::ll_extract_region;
