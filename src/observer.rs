//! Notifications from the simulation to whatever presents it.
//!
//! Observers only receive liveness; they have no way to write back into the
//! lattice.

use std::cell::RefCell;
use std::rc::Rc;

use crate::automaton::grid::index_of;
use crate::config::validate_dimension;
use crate::error::Result;
use crate::state::{try_filled, Coord};

pub trait LivenessObserver {
    /// Called once per cell when the observer is attached.
    fn cell_initialized(&mut self, coord: Coord, alive: bool);

    /// Called for every cell whose liveness flipped during a step.
    fn cell_changed(&mut self, coord: Coord, alive: bool);

    /// Called after the changes of a step have been delivered.
    fn generation_completed(&mut self, _generation: u64, _changed: usize) {}
}

/// Lets the host keep a handle to an observer it has handed to a simulation.
impl<O: LivenessObserver> LivenessObserver for Rc<RefCell<O>> {
    fn cell_initialized(&mut self, coord: Coord, alive: bool) {
        self.borrow_mut().cell_initialized(coord, alive);
    }

    fn cell_changed(&mut self, coord: Coord, alive: bool) {
        self.borrow_mut().cell_changed(coord, alive);
    }

    fn generation_completed(&mut self, generation: u64, changed: usize) {
        self.borrow_mut().generation_completed(generation, changed);
    }
}

/// Observer that mirrors liveness into a flat z,y,x-ordered vector.
///
/// Useful for hosts that poll instead of reacting to callbacks.
#[derive(Debug, Clone)]
pub struct VisibilityMirror {
    dimension: usize,
    pub visible: Vec<bool>,
    pub generation: u64,
    pub last_changed: usize,
}

impl VisibilityMirror {
    pub fn new(dimension: usize) -> Result<Self> {
        let size = validate_dimension(dimension)?;
        Ok(VisibilityMirror {
            dimension,
            visible: try_filled(size, false)?,
            generation: 0,
            last_changed: 0,
        })
    }

    /// False for coordinates outside the mirrored lattice.
    pub fn is_visible(&self, coord: Coord) -> bool {
        self.index(coord)
            .and_then(|idx| self.visible.get(idx).copied())
            .unwrap_or(false)
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        let n = self.dimension;
        (coord.x < n && coord.y < n && coord.z < n)
            .then(|| index_of(n, coord.x, coord.y, coord.z))
    }

    // Notifications for another lattice size are dropped.
    fn set(&mut self, coord: Coord, alive: bool) {
        if let Some(slot) = self.index(coord).and_then(|idx| self.visible.get_mut(idx)) {
            *slot = alive;
        }
    }
}

impl LivenessObserver for VisibilityMirror {
    fn cell_initialized(&mut self, coord: Coord, alive: bool) {
        self.set(coord, alive);
    }

    fn cell_changed(&mut self, coord: Coord, alive: bool) {
        self.set(coord, alive);
    }

    fn generation_completed(&mut self, generation: u64, changed: usize) {
        self.generation = generation;
        self.last_changed = changed;
    }
}
