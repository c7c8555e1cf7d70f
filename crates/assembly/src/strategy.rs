//! Strategy selector for the two-active-pools case.
//!
//! Decides which of the two remaining pools donates the extra member of a
//! team. The selector holds only the call-scoped toggle used by
//! `alternate`; randomness comes from the call's generator passed in.

use rand::Rng;
use types::{Category, TwoCategoryStrategy};

use crate::pool::PoolState;

/// Extra-member decision state for one generation call.
#[derive(Debug, Clone)]
pub struct StrategySelector {
    strategy: TwoCategoryStrategy,
    /// Decisions taken so far under `alternate`.
    toggle: u64,
}

impl StrategySelector {
    pub fn new(strategy: TwoCategoryStrategy) -> Self {
        Self {
            strategy,
            toggle: 0,
        }
    }

    pub fn strategy(&self) -> TwoCategoryStrategy {
        self.strategy
    }

    /// Pick the donor pool. `first` and `second` are the two active labels
    /// in canonical order.
    pub fn select<R: Rng>(
        &mut self,
        first: Category,
        second: Category,
        pools: &PoolState,
        rng: &mut R,
    ) -> Category {
        match self.strategy {
            TwoCategoryStrategy::Larger => {
                if pools.remaining(second) > pools.remaining(first) {
                    second
                } else {
                    first
                }
            }
            TwoCategoryStrategy::Random => {
                if rng.random::<f64>() < 0.5 {
                    first
                } else {
                    second
                }
            }
            TwoCategoryStrategy::Alternate => {
                let chosen = if self.toggle % 2 == 0 { first } else { second };
                self.toggle += 1;
                if pools.is_empty(chosen) {
                    if chosen == first { second } else { first }
                } else {
                    chosen
                }
            }
        }
    }
}
