//! Random sources for choices the rules leave to chance.
//!
//! The only random decision is which armour location absorbs a point of
//! damage. It is drawn through [`RandomSource`] so the host (or a test) decides
//! where the entropy comes from. Live and seeded sources backed by `rand` live
//! in the runtime.

use std::collections::VecDeque;

/// Source of uniform random choices.
pub trait RandomSource: Send {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}

/// Replays a fixed list of picks, wrapping each into range. Falls back to 0
/// once the script is exhausted.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRandom {
    picks: VecDeque<usize>,
}

impl ScriptedRandom {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.picks.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0) % len.max(1)
    }
}
