//! CLI-side configuration for one-shot generation.
//!
//! Flags given on the command line override the matching fields of the
//! request read from file or stdin.

use clap::ValueEnum;
use types::GenerationRequest;

/// Output format of `generate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Full result (teams + meta) as pretty JSON.
    #[default]
    Json,
    /// One row per team, quoted cells.
    Csv,
}

/// Command-line overrides applied on top of a request.
#[derive(Debug, Clone, Default)]
pub struct RequestOverrides {
    pub seed: Option<u64>,
    pub team_size: Option<i64>,
    pub strategy: Option<String>,
    pub allow_incomplete: Option<bool>,
}

impl RequestOverrides {
    /// Apply every set override to `request`.
    pub fn apply(&self, mut request: GenerationRequest) -> GenerationRequest {
        if let Some(seed) = self.seed {
            request.seed = Some(seed);
        }
        if let Some(team_size) = self.team_size {
            request.options.team_size = team_size;
        }
        if let Some(ref strategy) = self.strategy {
            request.options.two_category_strategy = strategy.clone();
        }
        if let Some(allow) = self.allow_incomplete {
            request.options.allow_incomplete_teams = allow;
        }
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_overrides_keep_request() {
        let request = GenerationRequest {
            seed: Some(4),
            ..Default::default()
        };
        assert_eq!(RequestOverrides::default().apply(request.clone()), request);
    }

    #[test]
    fn test_overrides_replace_fields() {
        let overrides = RequestOverrides {
            seed: Some(9),
            team_size: Some(4),
            strategy: Some("alternate".into()),
            allow_incomplete: Some(false),
        };
        let request = overrides.apply(GenerationRequest::default());
        assert_eq!(request.seed, Some(9));
        let opts = request.options().unwrap();
        assert_eq!(opts.team_size, 4);
        assert_eq!(opts.two_category_strategy, types::TwoCategoryStrategy::Alternate);
        assert!(!opts.allow_incomplete_teams);
    }
}
