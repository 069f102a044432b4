//! Random sources for reply selection

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Picks a reply index uniformly from `0..len`
///
/// Callers guarantee `len >= 1`.
pub trait ReplyPicker: Send + Sync {
    fn pick(&self, len: usize) -> usize;
}

/// Thread-local RNG; safe to share across request handlers
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngPicker;

impl ReplyPicker for ThreadRngPicker {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Seeded RNG behind a mutex, for reproducible sessions
#[derive(Debug)]
pub struct SeededPicker {
    rng: Mutex<StdRng>,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl ReplyPicker for SeededPicker {
    fn pick(&self, len: usize) -> usize {
        // A poisoned lock still holds a usable RNG
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        rng.gen_range(0..len)
    }
}

/// Always returns the same index, clamped to the pool
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker(pub usize);

#[cfg(test)]
impl ReplyPicker for FixedPicker {
    fn pick(&self, len: usize) -> usize {
        self.0.min(len - 1)
    }
}
