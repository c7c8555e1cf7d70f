//! Server crate: Axum HTTP service for team generation.
//!
//! Exposes the assembly engine over JSON. Each request is handled
//! independently: it builds its own pools and seeded generator, so requests
//! never share mutable state.
//!
//! # Modules
//!
//! - [`app`]: Axum application builder, router setup and server config
//! - [`state`]: Shared server state (request counters)
//! - [`error`]: Unified error handling with HTTP status codes
//! - [`routes`]: HTTP route handlers (health, teams)

pub mod app;
pub mod error;
pub mod routes;
pub mod state;

// Re-exports for convenience
pub use app::{ServerConfig, create_app, serve};
pub use error::{AppError, AppResult};
pub use state::ServerState;
