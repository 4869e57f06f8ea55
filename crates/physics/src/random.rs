//! Seedable pseudo-random source for turbulence.
//!
//! Uses the xorshift32 algorithm. Turbulence drawn from a seeded generator
//! keeps the force model replayable: two simulations built with the same
//! seed and fed the same inputs produce identical trajectories.

use serde::{Deserialize, Serialize};

/// Deterministic pseudo-random number generator (xorshift32).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeededRandom {
    state: u32,
}

impl SeededRandom {
    /// Creates a new generator with the given seed.
    /// Seed of 0 is treated as 1 to avoid the degenerate all-zero sequence.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Returns a random float in [0, 1).
    pub fn next(&mut self) -> f32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        (x as f32) / (u32::MAX as f32)
    }

    /// Returns a random float centered on zero, in [-0.5, 0.5).
    #[inline]
    pub fn next_centered(&mut self) -> f32 {
        self.next() - 0.5
    }

    /// Returns a random float in the range [min, max).
    pub fn next_range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next() * (max - min)
    }
}
