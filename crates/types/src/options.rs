//! Generation options.
//!
//! [`OptionsInput`] is the lenient wire shape (camelCase, every field
//! optional, unknown fields ignored). [`GenerationOptions`] is the validated
//! form the assembler consumes; the only way from one to the other is
//! [`OptionsInput::resolve`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DEFAULT_TEAM_SIZE;

// =============================================================================
// ConfigError
// =============================================================================

/// Rejected generation configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Team size must be a positive integer.
    #[error("teamSize must be a positive integer, got {0}")]
    InvalidTeamSize(i64),

    /// Strategy name is not one of `larger`, `random`, `alternate`.
    #[error("unknown twoCategoryStrategy '{0}' (expected larger, random or alternate)")]
    UnknownStrategy(String),
}

// =============================================================================
// TwoCategoryStrategy
// =============================================================================

/// Rule deciding which of two active pools donates the extra team member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TwoCategoryStrategy {
    /// The pool with more members remaining; ties go to the first label.
    #[default]
    Larger,
    /// A fair coin drawn from the call's seeded generator.
    Random,
    /// Take turns between the two pools, first label first.
    Alternate,
}

impl TwoCategoryStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            TwoCategoryStrategy::Larger => "larger",
            TwoCategoryStrategy::Random => "random",
            TwoCategoryStrategy::Alternate => "alternate",
        }
    }
}

impl fmt::Display for TwoCategoryStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TwoCategoryStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "larger" => Ok(TwoCategoryStrategy::Larger),
            "random" => Ok(TwoCategoryStrategy::Random),
            "alternate" => Ok(TwoCategoryStrategy::Alternate),
            _ => Err(ConfigError::UnknownStrategy(s.to_string())),
        }
    }
}

// =============================================================================
// GenerationOptions
// =============================================================================

/// Validated options for one generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOptions {
    /// Target members per team (always >= 1).
    pub team_size: usize,
    /// Extra-member rule when exactly two pools remain.
    pub two_category_strategy: TwoCategoryStrategy,
    /// Keep under-sized trailing teams instead of dropping them.
    pub allow_incomplete_teams: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            team_size: DEFAULT_TEAM_SIZE,
            two_category_strategy: TwoCategoryStrategy::Larger,
            allow_incomplete_teams: true,
        }
    }
}

impl GenerationOptions {
    /// Create options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the team size.
    pub fn team_size(mut self, team_size: usize) -> Self {
        self.team_size = team_size;
        self
    }

    /// Set the two-category strategy.
    pub fn strategy(mut self, strategy: TwoCategoryStrategy) -> Self {
        self.two_category_strategy = strategy;
        self
    }

    /// Set whether incomplete teams are kept.
    pub fn allow_incomplete(mut self, allow: bool) -> Self {
        self.allow_incomplete_teams = allow;
        self
    }

    /// Check invariants that the builder setters cannot enforce.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.team_size == 0 {
            return Err(ConfigError::InvalidTeamSize(0));
        }
        Ok(())
    }
}

// =============================================================================
// OptionsInput
// =============================================================================

/// Options as received from a caller, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptionsInput {
    pub team_size: i64,
    pub two_category_strategy: String,
    pub allow_incomplete_teams: bool,
}

impl Default for OptionsInput {
    fn default() -> Self {
        Self {
            team_size: DEFAULT_TEAM_SIZE as i64,
            two_category_strategy: TwoCategoryStrategy::Larger.as_str().to_string(),
            allow_incomplete_teams: true,
        }
    }
}

impl OptionsInput {
    /// Validate and convert into [`GenerationOptions`].
    pub fn resolve(&self) -> Result<GenerationOptions, ConfigError> {
        let team_size = usize::try_from(self.team_size)
            .ok()
            .filter(|&n| n > 0)
            .ok_or(ConfigError::InvalidTeamSize(self.team_size))?;
        let two_category_strategy = self.two_category_strategy.parse()?;

        let options = GenerationOptions {
            team_size,
            two_category_strategy,
            allow_incomplete_teams: self.allow_incomplete_teams,
        };
        options.validate()?;
        Ok(options)
    }
}
