//! WASM-compatible random number generator.
//!
//! Uses the `rand` crate with `SmallRng` (xoshiro256++) which is fast and
//! works with WASM. Entropy is sourced from `getrandom` (browser crypto API).

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A seedable RNG wrapper shared by the shuffle and the page effects.
///
/// Can be seeded for deterministic replay, or created from system entropy.
pub struct GameRng {
    inner: SmallRng,
}

impl GameRng {
    /// Create from system entropy (browser crypto.getRandomValues or OS).
    pub fn new() -> Self {
        Self {
            inner: SmallRng::from_os_rng(),
        }
    }

    /// Create with a specific seed for deterministic behavior.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
        }
    }

    /// Generate a random usize in [0, max).
    #[inline(always)]
    pub fn gen_range(&mut self, max: usize) -> usize {
        self.inner.random_range(0..max)
    }

    /// Generate a random f32 in [0, 1), the `Math.random()` equivalent
    /// the original effect formulas are written against.
    #[inline(always)]
    pub fn unit_f32(&mut self) -> f32 {
        self.inner.random::<f32>()
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new()
    }
}
