//! Result aggregator: collects emitted teams and incomplete-team accounting.

use types::{GenerationMeta, GenerationResult, Team};

/// Accumulates teams in emission order.
#[derive(Debug, Clone)]
pub struct ResultAggregator {
    team_size: usize,
    teams: Vec<Team>,
    incomplete: usize,
}

impl ResultAggregator {
    pub fn new(team_size: usize) -> Self {
        Self {
            team_size,
            teams: Vec::new(),
            incomplete: 0,
        }
    }

    /// Record a team. Empty teams are ignored; teams shorter than the
    /// configured size are counted as incomplete.
    pub fn emit(&mut self, team: Team) {
        if team.is_empty() {
            return;
        }
        if team.len() < self.team_size {
            self.incomplete += 1;
        }
        self.teams.push(team);
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    pub fn incomplete(&self) -> usize {
        self.incomplete
    }

    /// Close the aggregation and build the result record.
    pub fn finish(self, seed_used: u64, total_participants: usize) -> GenerationResult {
        let assigned_participants = self.teams.iter().map(Vec::len).sum();
        GenerationResult {
            teams: self.teams,
            meta: GenerationMeta {
                incomplete_teams: self.incomplete,
                seed_used,
                team_size: self.team_size,
                total_participants,
                assigned_participants,
            },
        }
    }
}
