//! Match request errors

use thiserror::Error;

/// Errors detected while validating a match request.
///
/// All of these are raised before any scoring starts; a request that
/// validates always scores.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// Selector is not one of the known algorithm keys
    #[error("unknown match algorithm: '{0}'")]
    InvalidAlgorithm(String),

    /// Threshold is not an integer in 0..=100
    #[error("invalid match threshold '{0}': expected an integer between 0 and 100")]
    InvalidThreshold(String),

    /// A required string was empty or whitespace only
    #[error("{field} must not be blank")]
    InvalidInput { field: &'static str },
}

/// Result type for request validation
pub type Result<T> = std::result::Result<T, MatchError>;
