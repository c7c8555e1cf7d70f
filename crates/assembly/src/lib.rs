//! Assembly crate: deterministic, seedable team formation.
//!
//! Participants come in up to three labeled pools (A, B, C). A generation
//! call shuffles each pool with one seeded generator, then drains the pools
//! into teams that take at most one member per category while more than one
//! category remains.
//!
//! # Pipeline
//!
//! ```text
//! Categories ──► Shuffler ──► PoolState ──► TeamAssembler ──► ResultAggregator
//!   + seed        (StdRng)     (3 stacks)    (+ StrategySelector)   │
//!                                                                   ▼
//!                                                          GenerationResult
//! ```
//!
//! # Modules
//!
//! - [`shuffle`]: seeded permutation of each pool
//! - [`pool`]: the three stacks being drained
//! - [`strategy`]: extra-seat decision when two pools remain
//! - [`assembler`]: the three/two/one/zero active-pool loop
//! - [`aggregate`]: emitted teams and incomplete-team accounting
//! - [`export`]: CSV rendering of a result
//!
//! Each call owns its pools and generator, so concurrent calls share nothing.

pub mod aggregate;
pub mod assembler;
pub mod error;
pub mod export;
pub mod pool;
pub mod shuffle;
pub mod strategy;

pub use aggregate::ResultAggregator;
pub use assembler::TeamAssembler;
pub use error::{GenerationError, Result};
pub use export::teams_to_csv;
pub use pool::PoolState;
pub use shuffle::Shuffler;
pub use strategy::StrategySelector;

use tracing::debug;
use types::{Categories, GenerationOptions, GenerationRequest, GenerationResult};

/// Form teams from `categories`.
///
/// With `seed` set the result is fully reproducible; without it a seed is
/// drawn from OS entropy and reported in `meta.seed_used`.
pub fn generate(
    categories: &Categories,
    options: GenerationOptions,
    seed: Option<u64>,
) -> Result<GenerationResult> {
    options.validate()?;

    let mut shuffler = Shuffler::new(seed);
    let seed_used = shuffler.seed();
    let pools = shuffler.shuffle(categories);
    let total = pools.remaining_count();
    debug!(
        seed = seed_used,
        total,
        team_size = options.team_size,
        strategy = %options.two_category_strategy,
        "generating teams"
    );

    let results = TeamAssembler::new(options, pools, shuffler.into_rng()).run();
    Ok(results.finish(seed_used, total))
}

/// Validate a wire request and run [`generate`] on it.
pub fn generate_request(request: &GenerationRequest) -> Result<GenerationResult> {
    let options = request.options()?;
    generate(&request.categories, options, request.seed)
}
