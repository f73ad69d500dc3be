//! Life Lattice - 3D Game of Life on a torus
//!
//! A toroidal N×N×N lattice of binary cells advanced under the "4555" rule,
//! with a C ABI so a game engine can drive it and mirror liveness into its
//! scene.

pub mod automaton;
pub mod config;
pub mod error;
pub mod ffi;
pub mod logging;
pub mod observer;
pub mod state;


pub use automaton::Simulation;
pub use config::LatticeConfig;
pub use error::{LatticeError, Result};
pub use observer::{LivenessObserver, VisibilityMirror};
pub use state::{Coord, Lattice};
