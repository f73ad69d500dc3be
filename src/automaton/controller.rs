//! Simulation driver with blocking and frame-budgeted stepping.
//!
//! A step can be split across several host frames: `begin_step` opens a sweep,
//! each `tick` fills as many z-slabs of the scratch buffer as fit in its time
//! budget, and the last tick swaps buffers. The current generation is never
//! written during a sweep, so slabs can be processed in any number of ticks
//! and the result is the same as a blocking step.

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::seeding::initialize;
use super::stepping::{fill_slab, step_lattice_parallel};
use crate::config::LatticeConfig;
use crate::error::{LatticeError, Result};
use crate::observer::LivenessObserver;
use crate::state::{Coord, Lattice};

/// Progress of an in-flight incremental step.
#[derive(Clone, Copy, Debug)]
struct IncrementalStep {
    /// Next z-plane to compute.
    next_slab: usize,
}

/// Owns a lattice, the worker pool used to step it, and the observer that
/// presents it.
pub struct Simulation {
    lattice: Lattice,
    config: LatticeConfig,
    thread_pool: rayon::ThreadPool,
    observer: Option<Box<dyn LivenessObserver>>,
    active_step: Option<IncrementalStep>,
}

fn build_thread_pool(num_threads: usize) -> Result<rayon::ThreadPool> {
    let num_threads = num_threads.max(1);
    match rayon::ThreadPoolBuilder::new().num_threads(num_threads).build() {
        Ok(pool) => Ok(pool),
        Err(e) => {
            tracing::warn!(error = %e, num_threads, "Falling back to a single stepping thread");
            rayon::ThreadPoolBuilder::new()
                .num_threads(1)
                .build()
                .map_err(|e| LatticeError::invalid_config(format!("thread pool: {}", e)))
        }
    }
}

impl Simulation {
    /// Validate `config`, seed a lattice and build the worker pool.
    pub fn new(config: LatticeConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let lattice = initialize(
            config.dimension,
            config.initial_alive_probability,
            &mut rng,
        )?;
        Self::from_lattice(lattice, config)
    }

    /// Wrap an existing lattice. `config.dimension` is overwritten with the
    /// lattice's own side length.
    pub fn from_lattice(lattice: Lattice, mut config: LatticeConfig) -> Result<Self> {
        config.dimension = lattice.dimension();
        let thread_pool = build_thread_pool(config.num_threads)?;

        tracing::info!(
            dimension = config.dimension,
            probability = config.initial_alive_probability,
            seed = ?config.seed,
            threads = thread_pool.current_num_threads(),
            alive = lattice.alive_count(),
            "Simulation created"
        );

        Ok(Simulation {
            lattice,
            config,
            thread_pool,
            observer: None,
            active_step: None,
        })
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn config(&self) -> &LatticeConfig {
        &self.config
    }

    pub fn generation(&self) -> u64 {
        self.lattice.generation()
    }

    /// Attach an observer and replay the current liveness of every cell to it.
    pub fn set_observer(&mut self, mut observer: Box<dyn LivenessObserver>) {
        self.lattice
            .for_each_cell(|coord, alive| observer.cell_initialized(coord, alive));
        self.observer = Some(observer);
    }

    pub fn clear_observer(&mut self) -> Option<Box<dyn LivenessObserver>> {
        self.observer.take()
    }

    /// Query whether a step is currently in progress.
    pub fn is_stepping(&self) -> bool {
        self.active_step.is_some()
    }

    /// Run one full step on the worker pool. If an incremental step is in
    /// progress it is finished instead.
    pub fn step_blocking(&mut self) -> Vec<Coord> {
        if self.is_stepping() {
            return self.finish_incremental();
        }
        let changed = step_lattice_parallel(&mut self.lattice, &self.thread_pool);
        self.publish(&changed);
        changed
    }

    /// Begin a new incremental step.
    pub fn begin_step(&mut self) -> Result<()> {
        if self.is_stepping() {
            return Err(LatticeError::StepInProgress);
        }
        self.active_step = Some(IncrementalStep { next_slab: 0 });
        Ok(())
    }

    /// Do bounded work within the given time budget. At least one slab is
    /// processed per call.
    ///
    /// Returns the changed cells once the step completes during this tick,
    /// `None` if more work remains. Without an active step this is a no-op
    /// that reports an empty completion.
    pub fn tick(&mut self, budget: Duration) -> Option<Vec<Coord>> {
        let mut step = match self.active_step {
            Some(s) => s,
            None => return Some(Vec::new()),
        };

        // An overflowing budget means "no deadline".
        let deadline = Instant::now().checked_add(budget);
        let n = self.lattice.dimension();

        {
            let (current, next) = self.lattice.split_buffers();
            while step.next_slab < n {
                let z = step.next_slab;
                fill_slab(current, n, z, &mut next[z * n * n..(z + 1) * n * n]);
                step.next_slab += 1;

                if deadline.map_or(false, |d| Instant::now() >= d) {
                    break;
                }
            }
        }

        if step.next_slab < n {
            self.active_step = Some(step);
            return None;
        }

        self.active_step = None;
        let changed = self.lattice.commit_next();
        self.publish(&changed);
        Some(changed)
    }

    fn finish_incremental(&mut self) -> Vec<Coord> {
        loop {
            if let Some(changed) = self.tick(Duration::MAX) {
                return changed;
            }
        }
    }

    fn publish(&mut self, changed: &[Coord]) {
        let generation = self.lattice.generation();
        tracing::debug!(
            generation,
            changed = changed.len(),
            alive = self.lattice.alive_count(),
            "Generation completed"
        );

        if let Some(observer) = self.observer.as_mut() {
            for &coord in changed {
                observer.cell_changed(coord, self.lattice.is_alive_at(coord));
            }
            observer.generation_completed(generation, changed.len());
        }
    }
}
