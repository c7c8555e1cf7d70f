//! Deterministic shuffler.
//!
//! Owns the single seeded generator of a generation call. Pools are copied
//! from the caller's lists and permuted in label order A, B, C; the same
//! generator is then handed to the assembler for `random` strategy draws, so
//! one seed fixes the whole call.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use types::{Categories, Category};

use crate::pool::PoolState;

/// Seeded permutation source for one generation call.
pub struct Shuffler {
    /// Random number generator (seeded for reproducibility)
    rng: StdRng,
    /// Seed the generator was built from
    seed: u64,
}

impl Shuffler {
    /// Create a shuffler from a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a shuffler, drawing a fresh seed from OS entropy when none is
    /// given. The drawn seed is kept so the call can still be reproduced.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        Self::with_seed(seed)
    }

    /// The effective seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Copy the caller's lists into a fresh [`PoolState`] and permute each pool.
    pub fn shuffle(&mut self, categories: &Categories) -> PoolState {
        let mut pools = PoolState::from_categories(categories);
        for category in Category::ALL {
            pools.pool_mut(category).shuffle(&mut self.rng);
        }
        pools
    }

    /// Hand the generator on to the assembler.
    pub fn into_rng(self) -> StdRng {
        self.rng
    }
}
