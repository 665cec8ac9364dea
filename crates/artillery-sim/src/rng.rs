//! Random number provider.
//!
//! The engine only ever asks for uniform reals, so tests can swap in a
//! scripted source without touching the physics.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of independent uniform draws.
pub trait RandomSource {
    /// Uniform real in `[low, high)`. Returns `low` when the range is empty.
    fn uniform(&mut self, low: f64, high: f64) -> f64;
}

/// Production source: seeded ChaCha8. Same seed, same game.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: ChaCha8Rng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if !(high > low) {
            return low;
        }
        self.rng.gen_range(low..high)
    }
}

/// Scripted source for tests and replays.
///
/// Each queued value is a unit fraction in `[0, 1)` mapped onto the requested
/// range. Once the queue is empty every draw returns the range midpoint,
/// which makes symmetric perturbations exactly zero.
#[derive(Debug, Clone, Default)]
pub struct FixedRandom {
    fractions: VecDeque<f64>,
}

impl FixedRandom {
    /// Source whose every draw is the midpoint of the requested range.
    pub fn midpoint() -> Self {
        Self::default()
    }

    pub fn with_fractions(fractions: impl IntoIterator<Item = f64>) -> Self {
        Self {
            fractions: fractions.into_iter().collect(),
        }
    }
}

impl RandomSource for FixedRandom {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        let fraction = self.fractions.pop_front().unwrap_or(0.5);
        low + (high - low) * fraction.clamp(0.0, 1.0)
    }
}
