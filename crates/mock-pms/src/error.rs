//! Error types for loading mock fixtures.

use thiserror::Error;

/// Errors that can occur while loading fixtures.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// Fixture file could not be read.
    #[error("failed to read fixtures: {0}")]
    Io(#[from] std::io::Error),

    /// Fixture file is not valid JSON of the expected shape.
    #[error("invalid fixtures: {0}")]
    Json(#[from] serde_json::Error),
}
