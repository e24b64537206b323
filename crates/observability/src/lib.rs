//! Tracing/logging setup shared by binaries and tests that use railyard.
//!
//! The library crates only emit `tracing` events; nothing is printed until a
//! subscriber is installed here.

/// Initialize process-wide tracing from the environment.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use crate::tracing::{LogFormat, ObservabilityError, TracingConfig, init_with};
