//! Random number generation
//!
//! Every shuffle draws from a [`RandomSource`]. Seeded generations use
//! [`SeededRng`], a 32-bit LCG fed by [`hash_seed`]; unseeded generations use
//! [`EntropySource`].
//!
//! CRITICAL: The seed hash and LCG constants must stay bit-exact so that
//! shared seeds reproduce the same groups everywhere.

mod lcg;
mod seed_hash;

pub use lcg::SeededRng;
pub use seed_hash::hash_seed;

use rand::Rng;

/// A source of uniform `f64` values in `[0.0, 1.0)`
pub trait RandomSource {
    /// Draw the next value in `[0.0, 1.0)`
    fn next_f64(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Non-deterministic source backed by the thread-local `rand` generator
///
/// Holds no generator handle, so it is `Send` and cheap to copy.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropySource;

impl RandomSource for EntropySource {
    fn next_f64(&mut self) -> f64 {
        rand::rng().random::<f64>()
    }
}
