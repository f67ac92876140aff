//! `rand`-backed implementation of the core sampler trait.

use pickleball_core::PointSampler;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform `1..=100` draws from a `StdRng`.
///
/// Entropy-seeded by default; construct with [`RandomSampler::seeded`]
/// to make a run reproducible.
#[derive(Debug, Clone)]
pub struct RandomSampler {
    rng: StdRng,
}

impl RandomSampler {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl PointSampler for RandomSampler {
    fn roll(&mut self) -> i32 {
        self.rng.gen_range(1..=100)
    }
}
