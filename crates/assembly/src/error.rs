//! Error types for team assembly.

use types::ConfigError;

/// Result type for assembly operations.
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Errors raised by a generation call or by rendering its result.
///
/// The assembly loop itself cannot fail. `Config` is a rejected input; the
/// export variants are failures on our side.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// Options failed validation.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// CSV writer failed.
    #[error("CSV export failed: {0}")]
    Export(#[from] csv::Error),

    /// CSV output was not valid UTF-8.
    #[error("CSV export produced invalid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

impl GenerationError {
    /// Whether the caller's input caused this error.
    pub fn is_rejection(&self) -> bool {
        matches!(self, GenerationError::Config(_))
    }
}
