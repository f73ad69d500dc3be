//! Core automaton logic and lattice operations.
//!
//! This module contains the actual logic for seeding the lattice, stepping
//! it under the 4555 rule, and reading or persisting generations.
//! The FFI layer in `ffi/` calls these functions.

pub mod board;
pub mod controller;
pub mod grid;
pub mod region;
pub mod seeding;
pub mod stepping;

pub use board::{load_board, save_board};
pub use controller::Simulation;
pub use grid::{count_neighbors, index_of, wrap};
pub use region::extract_region;
pub use seeding::initialize;
pub use stepping::{next_state, step_lattice, step_lattice_parallel};
