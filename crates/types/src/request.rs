//! Request and result records exchanged with callers.

use serde::{Deserialize, Serialize};

use crate::options::{ConfigError, GenerationOptions, OptionsInput};
use crate::{Categories, Team};

/// A generation request as posted by a client or read from a file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationRequest {
    /// Pools keyed by label; missing labels are empty.
    pub categories: Categories,
    /// Raw options, validated by [`GenerationRequest::options`].
    pub options: OptionsInput,
    /// Fixes the shuffle and every random decision when present.
    pub seed: Option<u64>,
}

impl GenerationRequest {
    /// Validated options for this request.
    pub fn options(&self) -> Result<GenerationOptions, ConfigError> {
        self.options.resolve()
    }
}

/// Metadata reported alongside the generated teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationMeta {
    /// Emitted teams shorter than `team_size`.
    pub incomplete_teams: usize,
    /// Seed that reproduces this result.
    pub seed_used: u64,
    /// Team size the call was configured with.
    pub team_size: usize,
    /// Participants across all input pools.
    pub total_participants: usize,
    /// Participants placed in an emitted team.
    pub assigned_participants: usize,
}

impl GenerationMeta {
    /// Participants left out because their remainder was dropped.
    pub fn dropped_participants(&self) -> usize {
        self.total_participants
            .saturating_sub(self.assigned_participants)
    }
}

/// Output of one generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Teams in emission order.
    pub teams: Vec<Team>,
    pub meta: GenerationMeta,
}
