//! Team assembler: the control loop that drains the pools into teams.
//!
//! Each iteration looks at which pools still have members and applies the
//! matching case:
//!
//! | Active pools | Action                                                        |
//! |--------------|---------------------------------------------------------------|
//! | 3            | One member from each of A, B, C (always a 3-member team)      |
//! | 2            | One from each, extra seats via [`StrategySelector`]           |
//! | 1            | Full teams of `team_size` while possible, then the remainder  |
//! | 0            | Done                                                          |
//!
//! Every iteration removes at least one member or ends the loop, so the loop
//! always terminates.
//!
//! The all-three case ignores `team_size` on purpose: with three categories a
//! team is one member of each. Such teams still count as incomplete when the
//! configured size is larger than three.

use rand::rngs::StdRng;
use tracing::debug;
use types::{Category, GenerationOptions, Team};

use crate::aggregate::ResultAggregator;
use crate::pool::PoolState;
use crate::strategy::StrategySelector;

/// Outcome of one loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Done,
}

/// Drives one generation call from shuffled pools to emitted teams.
pub struct TeamAssembler {
    options: GenerationOptions,
    pools: PoolState,
    selector: StrategySelector,
    /// Generator inherited from the shuffler
    rng: StdRng,
    results: ResultAggregator,
}

impl TeamAssembler {
    /// Create an assembler over already-shuffled pools. `options` must have
    /// passed validation.
    pub fn new(options: GenerationOptions, pools: PoolState, rng: StdRng) -> Self {
        Self {
            options,
            pools,
            selector: StrategySelector::new(options.two_category_strategy),
            rng,
            results: ResultAggregator::new(options.team_size),
        }
    }

    /// Run the loop to completion and hand back the collected teams.
    pub fn run(mut self) -> ResultAggregator {
        loop {
            let active = self.pools.active_labels();
            let step = match active.as_slice() {
                [a, b, c] => self.three_active(*a, *b, *c),
                [first, second] => self.two_active(*first, *second),
                [only] => self.one_active(*only),
                _ => Step::Done,
            };
            if step == Step::Done {
                break;
            }
        }
        debug!(
            teams = self.results.team_count(),
            incomplete = self.results.incomplete(),
            leftover = self.pools.remaining_count(),
            "assembly finished"
        );
        self.results
    }

    // =========================================================================
    // Cases
    // =========================================================================

    fn three_active(&mut self, a: Category, b: Category, c: Category) -> Step {
        let team: Team = [a, b, c]
            .into_iter()
            .filter_map(|category| self.pools.take(category))
            .collect();
        debug!(size = team.len(), "three pools active: one from each");
        self.results.emit(team);
        Step::Continue
    }

    fn two_active(&mut self, first: Category, second: Category) -> Step {
        let team_size = self.options.team_size;
        let combined = self.pools.remaining(first) + self.pools.remaining(second);

        if combined < team_size {
            let mut team = self.pools.drain(first);
            team.extend(self.pools.drain(second));
            debug!(%first, %second, size = team.len(), "two pools active: final remainder");
            self.emit_remainder(team);
            return Step::Done;
        }

        let mut team = Team::with_capacity(team_size);
        team.extend(self.pools.take(first));
        if team.len() < team_size {
            team.extend(self.pools.take(second));
        }

        while team.len() < team_size {
            let extra = self
                .selector
                .select(first, second, &self.pools, &mut self.rng);
            let member = self
                .pools
                .take(extra)
                .or_else(|| self.pools.take(first))
                .or_else(|| self.pools.take(second));
            match member {
                Some(member) => {
                    debug!(%extra, strategy = %self.selector.strategy(), "extra seat");
                    team.push(member);
                }
                None => break,
            }
        }

        if team.len() == team_size {
            self.results.emit(team);
            Step::Continue
        } else {
            self.emit_remainder(team);
            Step::Done
        }
    }

    fn one_active(&mut self, only: Category) -> Step {
        let team_size = self.options.team_size;
        let avail = self.pools.remaining(only);

        if avail >= team_size {
            let team: Team = (0..team_size)
                .filter_map(|_| self.pools.take(only))
                .collect();
            self.results.emit(team);
            return Step::Continue;
        }

        let team = self.pools.drain(only);
        debug!(%only, size = team.len(), "one pool active: final remainder");
        self.emit_remainder(team);
        Step::Done
    }

    /// Emit a trailing team if it is full or incomplete teams are allowed;
    /// otherwise drop it.
    fn emit_remainder(&mut self, team: Team) {
        if team.len() >= self.options.team_size || self.options.allow_incomplete_teams {
            self.results.emit(team);
        } else {
            debug!(dropped = team.len(), "incomplete remainder dropped");
        }
    }
}
