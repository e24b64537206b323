//! JSON helpers over `serde_json`, reporting failures as [`SerializationError`].
//!
//! [`Optional`](crate::Optional) needs no registration: its serde impls are
//! picked up wherever the type appears, including at the document root.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{SerializationError, SerializationResult};

pub fn to_string<T: Serialize + ?Sized>(value: &T) -> SerializationResult<String> {
    serde_json::to_string(value).map_err(|e| {
        tracing::debug!(error = %e, "json encode failed");
        SerializationError::Encode(e)
    })
}

pub fn to_value<T: Serialize + ?Sized>(value: &T) -> SerializationResult<serde_json::Value> {
    serde_json::to_value(value).map_err(|e| {
        tracing::debug!(error = %e, "json encode failed");
        SerializationError::Encode(e)
    })
}

pub fn from_str<T: DeserializeOwned>(input: &str) -> SerializationResult<T> {
    serde_json::from_str(input).map_err(|e| {
        tracing::debug!(error = %e, "json decode failed");
        SerializationError::Decode(e)
    })
}

pub fn from_value<T: DeserializeOwned>(value: serde_json::Value) -> SerializationResult<T> {
    serde_json::from_value(value).map_err(|e| {
        tracing::debug!(error = %e, "json decode failed");
        SerializationError::Decode(e)
    })
}
