//! Error model: a single, immutable description of one failure.

use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

use crate::codes;

/// Classification of a failure.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Input was malformed or a rule did not hold.
    Validation,
    /// A requested resource does not exist.
    NotFound,
    /// The operation clashes with current state (e.g. duplicate, stale version).
    Conflict,
    /// The caller is not authenticated.
    Unauthorized,
    /// The caller is authenticated but not allowed.
    Forbidden,
    /// Anything else.
    #[default]
    Failure,
}

/// One failure: code, message, classification and optional structured detail.
///
/// This is a dumb value carrier. Code and message content are not validated;
/// their format is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, ThisError, Serialize, Deserialize)]
#[error("[{code}] {message}")]
pub struct Error {
    code: String,
    message: String,
    #[serde(rename = "type", default)]
    error_type: ErrorType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl Error {
    pub fn new(code: impl Into<String>, message: impl Into<String>, error_type: ErrorType) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            error_type,
            details: None,
        }
    }

    /// Attach structured detail, replacing any previous detail.
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn validation(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(code, message, ErrorType::Validation)
    }

    pub fn not_found(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(code, message, ErrorType::NotFound)
    }

    pub fn conflict(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(code, message, ErrorType::Conflict)
    }

    pub fn unauthorized(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(code, message, ErrorType::Unauthorized)
    }

    pub fn forbidden(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(code, message, ErrorType::Forbidden)
    }

    pub fn failure(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(code, message, ErrorType::Failure)
    }

    /// Synthetic error standing in for a failure that carried no errors.
    pub fn unknown() -> Self {
        Self::failure(codes::UNKNOWN, "Unknown error")
    }

    /// Default error produced when a `filter`/`where` predicate rejects a value.
    pub fn predicate_failed() -> Self {
        Self::validation(codes::VALIDATION_PREDICATE_FAILED, "Condition failed")
            .with_details(serde_json::json!({ "rule": "where" }))
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn error_type(&self) -> ErrorType {
        self.error_type
    }

    pub fn details(&self) -> Option<&serde_json::Value> {
        self.details.as_ref()
    }
}
