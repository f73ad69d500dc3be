//! Core lattice state and helper methods.

use crate::automaton::grid::{coord_of, index_of, wrap};
use crate::config::validate_dimension;
use crate::error::{LatticeError, Result};

pub const DEAD: u8 = 0;
pub const ALIVE: u8 = 1;

/// A lattice coordinate, each component in `[0, dimension)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl Coord {
    pub fn new(x: usize, y: usize, z: usize) -> Self {
        Coord { x, y, z }
    }
}

/// Allocate `size` copies of `value`, failing instead of aborting when the
/// allocator cannot satisfy the request.
pub(crate) fn try_filled<T: Clone>(size: usize, value: T) -> Result<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(size).map_err(|e| {
        LatticeError::invalid_config(format!("cannot allocate {} cells: {}", size, e))
    })?;
    buf.resize(size, value);
    Ok(buf)
}

/// A toroidal N×N×N lattice of binary cells, double-buffered.
///
/// `buffers[current]` holds the current generation; the other buffer is
/// scratch space that the next step writes into before the roles flip.
#[derive(Clone, Debug)]
pub struct Lattice {
    dimension: usize,
    buffers: [Vec<u8>; 2],
    current: usize,
    generation: u64,
}

impl Lattice {
    /// Build a lattice from a predicate over coordinates.
    pub fn from_fn<F>(dimension: usize, mut alive: F) -> Result<Self>
    where
        F: FnMut(Coord) -> bool,
    {
        let size = validate_dimension(dimension)?;
        let mut cells = try_filled(size, DEAD)?;
        for (idx, cell) in cells.iter_mut().enumerate() {
            if alive(coord_of(dimension, idx)) {
                *cell = ALIVE;
            }
        }
        Self::with_cells(dimension, cells)
    }

    /// Build a lattice from a flat z,y,x-ordered buffer. Non-zero means alive.
    pub fn from_cells(dimension: usize, cells: Vec<u8>) -> Result<Self> {
        let size = validate_dimension(dimension)?;
        if cells.len() != size {
            return Err(LatticeError::invalid_config(format!(
                "expected {} cells for dimension {}, got {}",
                size,
                dimension,
                cells.len()
            )));
        }
        let cells = cells
            .into_iter()
            .map(|c| if c == DEAD { DEAD } else { ALIVE })
            .collect();
        Self::with_cells(dimension, cells)
    }

    /// Seed a lattice randomly; see [`crate::automaton::initialize`].
    pub fn random<R: rand::Rng + ?Sized>(
        dimension: usize,
        alive_probability: f64,
        rng: &mut R,
    ) -> Result<Self> {
        crate::automaton::initialize(dimension, alive_probability, rng)
    }

    /// Both buffers start as copies of `cells`.
    pub(crate) fn with_cells(dimension: usize, cells: Vec<u8>) -> Result<Self> {
        let mut scratch = Vec::new();
        scratch.try_reserve_exact(cells.len()).map_err(|e| {
            LatticeError::invalid_config(format!("cannot allocate scratch buffer: {}", e))
        })?;
        scratch.extend_from_slice(&cells);
        Ok(Lattice {
            dimension,
            buffers: [cells, scratch],
            current: 0,
            generation: 0,
        })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The current generation in z,y,x order.
    pub fn cells(&self) -> &[u8] {
        &self.buffers[self.current]
    }

    /// Liveness at a coordinate. Components wrap around the torus.
    pub fn is_alive(&self, x: isize, y: isize, z: isize) -> bool {
        let n = self.dimension;
        let idx = index_of(n, wrap(x, n), wrap(y, n), wrap(z, n));
        self.cells()[idx] == ALIVE
    }

    /// Liveness at an in-range coordinate.
    pub fn is_alive_at(&self, coord: Coord) -> bool {
        self.cells()[index_of(self.dimension, coord.x, coord.y, coord.z)] == ALIVE
    }

    pub fn alive_count(&self) -> usize {
        self.cells().iter().filter(|&&c| c == ALIVE).count()
    }

    /// Visit every coordinate with its current liveness, in storage order.
    pub fn for_each_cell<F: FnMut(Coord, bool)>(&self, mut f: F) {
        for (idx, &cell) in self.cells().iter().enumerate() {
            f(coord_of(self.dimension, idx), cell == ALIVE);
        }
    }

    /// Advance one generation; returns the coordinates whose liveness changed.
    pub fn step(&mut self) -> Vec<Coord> {
        crate::automaton::step_lattice(self)
    }

    /// Same as [`Lattice::step`], spreading z-slabs across `pool`.
    pub fn step_parallel(&mut self, pool: &rayon::ThreadPool) -> Vec<Coord> {
        crate::automaton::step_lattice_parallel(self, pool)
    }

    /// Current generation (read) and next generation (write).
    pub(crate) fn split_buffers(&mut self) -> (&[u8], &mut [u8]) {
        let (first, second) = self.buffers.split_at_mut(1);
        if self.current == 0 {
            (&first[0], &mut second[0])
        } else {
            (&second[0], &mut first[0])
        }
    }

    /// Make the fully written next buffer current and bump the generation.
    /// Must only be called after every cell of the next buffer was written.
    pub(crate) fn commit_next(&mut self) -> Vec<Coord> {
        let current = &self.buffers[self.current];
        let next = &self.buffers[1 - self.current];
        let changed = current
            .iter()
            .zip(next.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(idx, _)| coord_of(self.dimension, idx))
            .collect();

        self.current = 1 - self.current;
        self.generation += 1;
        changed
    }
}
