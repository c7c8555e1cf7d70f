//! Team Builder - Main binary
//!
//! Two modes:
//!
//! - `serve`: run the HTTP API (`POST /api/generate-teams`)
//! - `generate`: read one request as JSON from a file or stdin, print the
//!   result as JSON or CSV
//!
//! ```text
//! team-builder serve --port 8000
//! team-builder generate request.json --seed 42 --format csv
//! echo '{"categories":{"A":["ann"]}}' | team-builder generate -
//! ```

mod config;

use std::io::Read;

use anyhow::Context;
use clap::{Parser, Subcommand};
use server::ServerConfig;
use tracing::info;
use types::GenerationRequest;

use config::{OutputFormat, RequestOverrides};

/// Team Builder - one-per-category team assembly
#[derive(Parser, Debug)]
#[command(name = "team-builder")]
#[command(about = "Assemble teams from up to three participant categories")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API
    Serve {
        /// Host to bind to (default: $TEAM_SERVER_HOST or 0.0.0.0)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (default: $TEAM_SERVER_PORT or 8000)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Generate teams once and print the result
    Generate {
        /// Request JSON file ("-" for stdin)
        #[arg(value_name = "PATH", default_value = "-")]
        input: String,

        /// Seed overriding the request's seed
        #[arg(long, env = "TEAM_SEED")]
        seed: Option<u64>,

        /// Team size overriding the request's options
        #[arg(long, allow_negative_numbers = true)]
        team_size: Option<i64>,

        /// Two-category strategy (larger, random, alternate)
        #[arg(long)]
        strategy: Option<String>,

        /// Keep incomplete trailing teams
        #[arg(long)]
        allow_incomplete: Option<bool>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port } => {
            let config = ServerConfig::from_env().with_overrides(host, port);
            info!("Starting server on {}", config.bind_addr());
            server::serve(&config)
                .await
                .with_context(|| format!("server on {} failed", config.bind_addr()))?;
        }
        Commands::Generate {
            input,
            seed,
            team_size,
            strategy,
            allow_incomplete,
            format,
        } => {
            let overrides = RequestOverrides {
                seed,
                team_size,
                strategy,
                allow_incomplete,
            };
            let request = overrides.apply(read_request(&input)?);
            let result = assembly::generate_request(&request)?;
            info!(
                seed = result.meta.seed_used,
                teams = result.teams.len(),
                incomplete = result.meta.incomplete_teams,
                "generated"
            );

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
                OutputFormat::Csv => println!("{}", assembly::teams_to_csv(&result.teams)?),
            }
        }
    }

    Ok(())
}

/// Read a generation request from a path, or stdin for `-`.
fn read_request(input: &str) -> anyhow::Result<GenerationRequest> {
    let text = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read request from stdin")?;
        buf
    } else {
        std::fs::read_to_string(input).with_context(|| format!("failed to read {input}"))?
    };

    serde_json::from_str(&text).with_context(|| format!("invalid request JSON in {input}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_flags_are_optional() {
        let cli = Cli::try_parse_from(["team-builder", "serve"]).unwrap();
        match cli.command {
            Commands::Serve { host, port } => {
                assert_eq!(host, None);
                assert_eq!(port, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_serve_flags_override_env_config() {
        let cli =
            Cli::try_parse_from(["team-builder", "serve", "--host", "127.0.0.1", "--port", "9100"])
                .unwrap();
        let Commands::Serve { host, port } = cli.command else {
            panic!("expected serve");
        };
        let config = ServerConfig::from_env().with_overrides(host, port);
        assert_eq!(config.bind_addr(), "127.0.0.1:9100");
    }

    #[test]
    fn test_generate_defaults_to_stdin_json() {
        let cli = Cli::try_parse_from(["team-builder", "generate", "--team-size", "-1"]).unwrap();
        let Commands::Generate {
            input,
            team_size,
            format,
            ..
        } = cli.command
        else {
            panic!("expected generate");
        };
        assert_eq!(input, "-");
        assert_eq!(team_size, Some(-1));
        assert_eq!(format, OutputFormat::Json);
    }
}
