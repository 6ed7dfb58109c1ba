//! Tile order randomization.
//!
//! Uses a uniform Fisher–Yates permutation from `rand`. A "sort by random
//! comparator" is deliberately not used here: it produces a non-uniform,
//! implementation-dependent ordering.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{rng, SeedableRng};

use crate::tile::Tile;

/// Shuffles tiles in place with a thread-local RNG.
pub fn shuffle_tiles(tiles: &mut [Tile]) {
    tiles.shuffle(&mut rng());
}

/// Shuffles tiles in place with a seeded RNG.
///
/// Same permutation for the same seed and length, which is what tests and
/// reproducible renders want.
pub fn shuffle_tiles_seeded(tiles: &mut [Tile], seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    tiles.shuffle(&mut rng);
}
