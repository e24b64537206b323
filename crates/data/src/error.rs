//! Codec error model.

use thiserror::Error;

pub type CodecResult<T> = Result<T, CodecError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Input is not well-formed for the requested encoding.
    #[error("invalid base64 input: {0}")]
    Format(#[from] ::base64::DecodeError),
}
