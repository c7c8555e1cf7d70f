//! Shared server state.
//!
//! Generation calls share nothing with each other: every request builds its
//! own pools and generator. The state only carries counters for the health
//! endpoint.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Shared state for all route handlers.
///
/// Cloned into each handler via Axum's State extractor.
#[derive(Clone)]
pub struct ServerState {
    /// Server start time.
    pub start_time: Instant,

    /// Shared metrics.
    pub metrics: Arc<ServerMetrics>,
}

impl ServerState {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            metrics: Arc::new(ServerMetrics::new()),
        }
    }

    /// Get uptime in seconds.
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Request counters.
pub struct ServerMetrics {
    /// Successful generation calls.
    pub generated: AtomicU64,
    /// Requests rejected before generation.
    pub rejected: AtomicU64,
    /// Teams returned across all calls.
    pub teams_formed: AtomicU64,
}

impl ServerMetrics {
    pub fn new() -> Self {
        Self {
            generated: AtomicU64::new(0),
            rejected: AtomicU64::new(0),
            teams_formed: AtomicU64::new(0),
        }
    }

    /// Record a successful generation.
    pub fn record_generation(&self, teams: usize) {
        self.generated.fetch_add(1, Ordering::Relaxed);
        self.teams_formed.fetch_add(teams as u64, Ordering::Relaxed);
    }

    /// Record a rejected request.
    pub fn record_rejection(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn generated(&self) -> u64 {
        self.generated.load(Ordering::Relaxed)
    }

    pub fn rejected(&self) -> u64 {
        self.rejected.load(Ordering::Relaxed)
    }

    pub fn teams_formed(&self) -> u64 {
        self.teams_formed.load(Ordering::Relaxed)
    }
}

impl Default for ServerMetrics {
    fn default() -> Self {
        Self::new()
    }
}
