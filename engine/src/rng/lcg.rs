//! 32-bit linear congruential generator
//!
//! `state = (state * 1664525 + 1013904223) mod 2^32`, output `state / 2^32`.
//!
//! # Determinism
//!
//! Same seed → same sequence. Shared seeds rely on the exact
//! multiplier/increment/modulus triple; never change them.

use serde::{Deserialize, Serialize};

use super::{hash_seed, RandomSource};

const MULTIPLIER: u32 = 1_664_525;
const INCREMENT: u32 = 1_013_904_223;
const MODULUS: f64 = 4_294_967_296.0; // 2^32

/// Deterministic generator used for seeded shuffles
///
/// # Example
/// ```
/// use group_maker_core::{RandomSource, SeededRng};
///
/// let mut rng = SeededRng::from_seed_str("x");
/// let value = rng.next_f64();
/// assert!((0.0..1.0).contains(&value));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    /// Create a generator whose state starts at `seed`
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Hash `seed` and start a generator from it
    pub fn from_seed_str(seed: &str) -> Self {
        Self::new(hash_seed(seed))
    }

    /// Advance the state and return it
    pub fn next_u32(&mut self) -> u32 {
        // Wrapping u32 arithmetic is exactly mod 2^32
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT);
        self.state
    }

    /// Current state, for inspection and replay
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SeededRng {
    fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / MODULUS
    }
}
