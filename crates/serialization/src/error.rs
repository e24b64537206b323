//! Serialization error model.

use thiserror::Error;

/// Result type used by the JSON helpers.
pub type SerializationResult<T> = Result<T, SerializationError>;

#[derive(Debug, Error)]
pub enum SerializationError {
    /// The input was not valid JSON for the requested type.
    #[error("invalid json: {0}")]
    Decode(#[source] serde_json::Error),

    /// The value could not be written as JSON.
    #[error("failed to encode json: {0}")]
    Encode(#[source] serde_json::Error),
}
