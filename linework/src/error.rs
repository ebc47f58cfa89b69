//! Error types used by the crate.

use linework_types::LineworkTypesError;
use thiserror::Error;

/// Linework error type.
#[derive(Debug, Error)]
pub enum LineworkError {
    /// Input text is not a valid geometry.
    #[error("failed to parse geometry: {0}")]
    Parse(String),
    /// Simplifier could not process the geometry.
    #[error("failed to simplify geometry: {0}")]
    Simplify(String),
    /// Geometry of unexpected shape was given to the pipeline.
    #[error(transparent)]
    ContractViolation(#[from] LineworkTypesError),
    /// Invalid or unreadable configuration.
    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),
    /// Error reading input or writing output.
    #[error("failed to read or write data")]
    Io(#[from] std::io::Error),
}

impl From<geozero::error::GeozeroError> for LineworkError {
    fn from(value: geozero::error::GeozeroError) -> Self {
        Self::Parse(value.to_string())
    }
}
