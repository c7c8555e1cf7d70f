//! Team generation endpoints.
//!
//! - `POST /api/generate-teams` - JSON request in, teams and meta out
//! - `POST /api/generate-teams/csv` - same request, teams as a CSV download
//!
//! Handlers validate the body, run one generation call and shape the
//! response. The call is synchronous and owns its pools and generator.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use types::{GenerationRequest, GenerationResult};

use crate::error::{AppError, AppResult};
use crate::state::ServerState;

/// Header echoing the effective seed on CSV downloads.
pub const SEED_HEADER: &str = "x-seed-used";

/// Generate teams: `POST /api/generate-teams`
pub async fn generate_teams(
    State(state): State<ServerState>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> AppResult<Json<GenerationResult>> {
    let result = run(&state, payload)?;
    Ok(Json(result))
}

/// Generate teams as CSV: `POST /api/generate-teams/csv`
pub async fn generate_teams_csv(
    State(state): State<ServerState>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> AppResult<Response> {
    let result = run(&state, payload)?;
    let csv = assembly::teams_to_csv(&result.teams)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"teams.csv\"".to_string(),
            ),
            (
                header::HeaderName::from_static(SEED_HEADER),
                result.meta.seed_used.to_string(),
            ),
        ],
        csv,
    )
        .into_response())
}

fn run(
    state: &ServerState,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> AppResult<GenerationResult> {
    let outcome = payload
        .map_err(AppError::from)
        .and_then(|Json(request)| assembly::generate_request(&request).map_err(AppError::from));

    match outcome {
        Ok(result) => {
            state.metrics.record_generation(result.teams.len());
            tracing::info!(
                seed = result.meta.seed_used,
                teams = result.teams.len(),
                incomplete = result.meta.incomplete_teams,
                dropped = result.meta.dropped_participants(),
                "teams generated"
            );
            Ok(result)
        }
        Err(err) => {
            state.metrics.record_rejection();
            tracing::warn!(error = %err, "generation request rejected");
            Err(err)
        }
    }
}
