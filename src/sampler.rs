// Copyright 2026 Uniqstic Research Group. All rights reserved.
// OGI Simulation Suite - Gaussian Sampling

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

// ─── RNG Modes ───────────────────────────────────────────────────────────────

/// How the engine PRNG is seeded.
///
/// `Interactive` draws a fresh entropy seed, so every session differs.
/// `Reproducible` fixes the seed, so repeated sessions are identical
/// (a reset re-seeds from the same value). The two modes are separate
/// by construction and share no fallback path.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RngMode {
    Interactive,
    Reproducible(u64),
}

impl RngMode {
    fn build(&self) -> ChaCha8Rng {
        match self {
            RngMode::Reproducible(seed) => ChaCha8Rng::seed_from_u64(*seed),
            RngMode::Interactive => ChaCha8Rng::from_entropy(),
        }
    }
}

// ─── Sampler ─────────────────────────────────────────────────────────────────

/// Gaussian sampler over the engine PRNG.
pub struct Sampler {
    rng: ChaCha8Rng,
}

impl Sampler {
    pub fn new(mode: RngMode) -> Self {
        Self { rng: mode.build() }
    }

    /// Draw one N(mean, std_dev) sample via the Box-Muller transform.
    ///
    /// `u1` is taken from (0, 1] so the log argument is never zero.
    pub fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1: f64 = 1.0 - self.rng.gen::<f64>();
        let u2: f64 = self.rng.gen();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}
