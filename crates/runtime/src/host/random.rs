//! Random sources backed by `rand`.
//!
//! [`ThreadRandom`] draws from the thread-local generator for live sessions.
//! [`SeededRandom`] wraps a seeded ChaCha generator so replays and fixture
//! runs pick the same armour locations every time.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use armoury_core::RandomSource;

/// [`RandomSource`] backed by the thread-local generator of `rand`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        rand::thread_rng().gen_range(0..len)
    }
}

/// Reproducible [`RandomSource`]: the same seed yields the same picks.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: ChaCha8Rng,
    seed: u64,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this source was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}
