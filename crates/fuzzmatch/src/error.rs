//! Error types for the record processor.

use fuzzmatch_core::MatchError;
use thiserror::Error;

/// Processor error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Request validation failed for a record
    #[error("match error: {0}")]
    Match(#[from] MatchError),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// A required property resolved to nothing
    #[error("missing required property: {0}")]
    MissingProperty(String),
}

/// Result type alias using the processor Error.
pub type Result<T> = std::result::Result<T, Error>;
