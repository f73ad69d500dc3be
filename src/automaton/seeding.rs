//! Random initial population.

use rand::Rng;

use crate::config::{validate_dimension, validate_probability};
use crate::error::Result;
use crate::state::{try_filled, Lattice, ALIVE, DEAD};

/// Allocate an N×N×N lattice where each cell is independently alive with
/// probability `alive_probability`.
///
/// One uniform `[0, 1)` draw per cell, in z,y,x storage order, so a seeded
/// `rng` always yields the same lattice.
pub fn initialize<R: Rng + ?Sized>(
    dimension: usize,
    alive_probability: f64,
    rng: &mut R,
) -> Result<Lattice> {
    let size = validate_dimension(dimension)?;
    validate_probability(alive_probability)?;

    let mut cells = try_filled(size, DEAD)?;
    for cell in cells.iter_mut() {
        if rng.gen::<f64>() < alive_probability {
            *cell = ALIVE;
        }
    }

    Lattice::with_cells(dimension, cells)
}
