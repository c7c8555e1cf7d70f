//! Health check endpoint.
//!
//! - `GET /health` - Liveness probe (always 200 if server is up)

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::ServerState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status.
    pub status: &'static str,
    /// Crate version.
    pub version: &'static str,
    /// Server uptime in seconds.
    pub uptime_secs: u64,
    /// Successful generation calls since start.
    pub generated: u64,
    /// Rejected generation requests since start.
    pub rejected: u64,
    /// Teams emitted across all successful calls.
    pub teams_formed: u64,
}

/// Liveness probe: `GET /health`
pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let metrics = &state.metrics;

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: state.uptime_secs(),
        generated: metrics.generated(),
        rejected: metrics.rejected(),
        teams_formed: metrics.teams_formed(),
    })
}
