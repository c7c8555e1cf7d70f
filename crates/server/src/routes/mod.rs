//! Route handlers for the server.
//!
//! # Modules
//!
//! - [`health`]: Liveness endpoint
//! - [`teams`]: Team generation endpoints (JSON and CSV)

pub mod health;
pub mod teams;
