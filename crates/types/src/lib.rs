//! Core types for the Team Builder.
//!
//! This crate provides the data shared between the assembly engine, the
//! HTTP server and the CLI: category labels, teams, generation options and
//! the request/result records exchanged with callers.

pub mod options;
pub mod request;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub use options::{ConfigError, GenerationOptions, OptionsInput, TwoCategoryStrategy};
pub use request::{GenerationMeta, GenerationRequest, GenerationResult};

// =============================================================================
// Constants
// =============================================================================

/// Default number of members per team.
pub const DEFAULT_TEAM_SIZE: usize = 3;

// =============================================================================
// Category
// =============================================================================

/// Label of one participant pool.
///
/// The ordering `A < B < C` is the canonical order used everywhere a set of
/// labels is walked (active-pool detection, three-way draws, shuffling).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    A,
    B,
    C,
}

impl Category {
    /// All labels in canonical order.
    pub const ALL: [Category; 3] = [Category::A, Category::B, Category::C];

    /// Position of this label in [`Category::ALL`].
    pub fn index(self) -> usize {
        match self {
            Category::A => 0,
            Category::B => 1,
            Category::C => 2,
        }
    }

    /// Label as a static string.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::A => "A",
            Category::B => "B",
            Category::C => "C",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Participants and Teams
// =============================================================================

/// Participant identifier (a cleaned name).
pub type Participant = String;

/// An assembled team, members in draw order.
pub type Team = Vec<Participant>;

/// Caller-supplied pools keyed by label. Absent labels are empty pools.
pub type Categories = BTreeMap<Category, Vec<Participant>>;

/// Total number of participants across all pools.
pub fn participant_count(categories: &Categories) -> usize {
    categories.values().map(Vec::len).sum()
}
