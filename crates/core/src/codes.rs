//! Well-known error codes.

pub const UNKNOWN: &str = "unknown";
pub const VALIDATION_REQUIRED: &str = "validation.required";
pub const VALIDATION_FORMAT: &str = "validation.format";
pub const VALIDATION_PREDICATE_FAILED: &str = "validation.predicate_failed";
pub const NOT_FOUND: &str = "common.not_found";
pub const CONFLICT: &str = "common.conflict";
pub const UNAUTHORIZED: &str = "auth.unauthorized";
pub const FORBIDDEN: &str = "auth.forbidden";
