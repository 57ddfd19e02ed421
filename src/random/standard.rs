//! This module provides a minimal random number generation interface on top
//! of the abstractions of the standard "rand" crate.

use crate::numeric::Float;
use rand::{Rng, SeedableRng};

/// Random number generation engine in use
type Engine = rand_xoshiro::Xoshiro256Plus;

/// Facade which only exposes what the particle gun needs from the rand crate
#[derive(Clone, Debug)]
pub struct RandGenerator {
    rng: Engine,
}
//
impl RandGenerator {
    /// Spawn a new random number generator
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Engine::seed_from_u64(seed),
        }
    }

    /// Generate a random floating-point number between 0 and 1
    pub fn random(&mut self) -> Float {
        self.rng.gen()
    }

    /// Advance state in an arbitrary but maximally fast way
    ///
    /// Equivalent to 2^128 calls to `random()`, which is enough to give each
    /// batch of events its own non-overlapping random number stream.
    ///
    pub fn jump(&mut self) {
        self.rng.jump();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_reproducible_and_in_range() {
        let mut rng1 = RandGenerator::new(12345);
        let mut rng2 = RandGenerator::new(12345);
        for _ in 0..100 {
            let x = rng1.random();
            assert!((0. ..1.).contains(&x));
            assert_eq!(x, rng2.random());
        }
    }

    #[test]
    fn jumps_change_the_stream() {
        let mut rng = RandGenerator::new(12345);
        let mut jumped = rng.clone();
        jumped.jump();
        assert_ne!(rng.random(), jumped.random());
    }
}
