//! Lattice stepping with the 4555 rule.

use rayon::prelude::*;

use super::grid::{count_neighbors, index_of};
use crate::state::{Coord, Lattice, ALIVE, DEAD};

/// 4555 transition for one cell.
///
/// - Fewer than 4 neighbors: dies
/// - Exactly 4: keeps its current state
/// - Exactly 5: born (or stays alive)
/// - More than 5: dies
#[inline]
pub fn next_state(current: u8, neighbors: u8) -> u8 {
    match neighbors {
        0..=3 => DEAD,
        4 => current,
        5 => ALIVE,
        _ => DEAD,
    }
}

/// Write the next generation of z-plane `z` into `slab` (length N²).
pub(crate) fn fill_slab(current: &[u8], dimension: usize, z: usize, slab: &mut [u8]) {
    for y in 0..dimension {
        for x in 0..dimension {
            let neighbors = count_neighbors(current, dimension, x, y, z);
            let here = current[index_of(dimension, x, y, z)];
            slab[y * dimension + x] = next_state(here, neighbors);
        }
    }
}

/// Step the lattice forward by one generation on the calling thread.
pub fn step_lattice(lattice: &mut Lattice) -> Vec<Coord> {
    let n = lattice.dimension();
    {
        let (current, next) = lattice.split_buffers();
        for (z, slab) in next.chunks_mut(n * n).enumerate() {
            fill_slab(current, n, z, slab);
        }
    }
    lattice.commit_next()
}

/// Step the lattice forward by one generation, one z-slab per rayon task.
///
/// Every task reads only the current buffer and writes only its own slab of
/// the next buffer; the join at the end of `install` is the barrier before
/// the swap.
pub fn step_lattice_parallel(lattice: &mut Lattice, pool: &rayon::ThreadPool) -> Vec<Coord> {
    let n = lattice.dimension();
    {
        let (current, next) = lattice.split_buffers();
        pool.install(|| {
            next.par_chunks_mut(n * n)
                .enumerate()
                .for_each(|(z, slab)| fill_slab(current, n, z, slab));
        });
    }
    lattice.commit_next()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_thread_pool() -> rayon::ThreadPool {
        rayon::ThreadPoolBuilder::new()
            .num_threads(2)
            .build()
            .unwrap()
    }

    #[test]
    fn test_next_state_table() {
        for count in 0..=3 {
            assert_eq!(next_state(ALIVE, count), DEAD);
            assert_eq!(next_state(DEAD, count), DEAD);
        }
        assert_eq!(next_state(ALIVE, 4), ALIVE);
        assert_eq!(next_state(DEAD, 4), DEAD);
        assert_eq!(next_state(ALIVE, 5), ALIVE);
        assert_eq!(next_state(DEAD, 5), ALIVE);
        for count in 6..=26 {
            assert_eq!(next_state(ALIVE, count), DEAD);
            assert_eq!(next_state(DEAD, count), DEAD);
        }
    }

    #[test]
    fn test_full_3x3x3_dies() {
        let mut lattice = Lattice::from_fn(3, |_| true).unwrap();
        let changed = step_lattice(&mut lattice);
        assert_eq!(changed.len(), 27);
        assert_eq!(lattice.alive_count(), 0);
        assert_eq!(lattice.generation(), 1);
    }

    #[test]
    fn test_cross_center_survives_on_four() {
        // Center + 4 orthogonal arms
        let cross = [(4, 4, 4), (3, 4, 4), (5, 4, 4), (4, 3, 4), (4, 5, 4)];
        let mut lattice =
            Lattice::from_fn(8, |c| cross.contains(&(c.x, c.y, c.z))).unwrap();
        assert_eq!(lattice.alive_count(), 5);

        step_lattice(&mut lattice);

        // Center had 4 neighbors, should survive
        assert!(lattice.is_alive(4, 4, 4));

        // Each arm had 3 neighbors, should die
        assert!(!lattice.is_alive(3, 4, 4));
        assert!(!lattice.is_alive(5, 4, 4));
        assert!(!lattice.is_alive(4, 3, 4));
        assert!(!lattice.is_alive(4, 5, 4));
    }

    #[test]
    fn test_step_generation_increments() {
        let mut lattice = Lattice::from_fn(4, |_| false).unwrap();

        assert_eq!(lattice.generation(), 0);
        step_lattice(&mut lattice);
        assert_eq!(lattice.generation(), 1);
        step_lattice(&mut lattice);
        assert_eq!(lattice.generation(), 2);
    }

    #[test]
    fn test_step_empty_lattice_stays_empty() {
        let mut lattice = Lattice::from_fn(4, |_| false).unwrap();

        let changed = step_lattice(&mut lattice);
        assert!(changed.is_empty());
        assert_eq!(lattice.alive_count(), 0);
        assert_eq!(lattice.generation(), 1);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut sequential =
            Lattice::from_fn(9, |c| (c.x * 7 + c.y * 3 + c.z * 5) % 4 == 0).unwrap();
        let mut parallel = sequential.clone();
        let pool = two_thread_pool();

        for _ in 0..5 {
            let a = step_lattice(&mut sequential);
            let b = step_lattice_parallel(&mut parallel, &pool);
            assert_eq!(a, b);
            assert_eq!(sequential.cells(), parallel.cells());
        }
        assert_eq!(parallel.generation(), 5);
    }
}
