//! Tracing/logging initialization.
//!
//! Configuration comes from the environment:
//! - `RUST_LOG`: filter directives (default `info`).
//! - `RAILYARD_LOG_FORMAT`: `json` (default) or `text`.

use core::str::FromStr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

pub const FILTER_ENV: &str = "RUST_LOG";
pub const FORMAT_ENV: &str = "RAILYARD_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum ObservabilityError {
    #[error("unknown log format: {0} (expected `json` or `text`)")]
    UnknownFormat(String),

    #[error("invalid log filter: {0}")]
    InvalidFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialized,
}

/// Output format of the installed subscriber.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event, with timestamps.
    #[default]
    Json,
    /// Compact human-readable lines.
    Text,
}

impl FromStr for LogFormat {
    type Err = ObservabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            _ => Err(ObservabilityError::UnknownFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl TracingConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset, empty or unparsable values
    /// fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let filter = lookup(FILTER_ENV)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());
        let format = lookup(FORMAT_ENV)
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        Self { filter, format }
    }
}

/// Initialize tracing/logging for the process from the environment.
///
/// Safe to call multiple times (subsequent calls are no-ops). An invalid
/// `RUST_LOG` falls back to `info`.
pub fn init() {
    let config = TracingConfig::from_env();
    if let Err(ObservabilityError::InvalidFilter(_)) = init_with(&config) {
        let _ = init_with(&TracingConfig {
            filter: DEFAULT_FILTER.to_string(),
            ..config
        });
    }
}

/// Install a global subscriber for `config`.
pub fn init_with(config: &TracingConfig) -> Result<(), ObservabilityError> {
    let filter = EnvFilter::try_new(&config.filter)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let installed = match config.format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
        LogFormat::Text => builder.compact().try_init(),
    };

    installed.map_err(|_| ObservabilityError::AlreadyInitialized)?;
    ::tracing::debug!(filter = %config.filter, format = ?config.format, "tracing initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = TracingConfig::from_lookup(lookup(&[]));
        assert_eq!(config, TracingConfig::default());
        assert_eq!(config.filter, "info");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn reads_filter_and_format() {
        let config = TracingConfig::from_lookup(lookup(&[
            (FILTER_ENV, "railyard_core=debug"),
            (FORMAT_ENV, "Text"),
        ]));

        assert_eq!(config.filter, "railyard_core=debug");
        assert_eq!(config.format, LogFormat::Text);
    }

    #[test]
    fn unknown_format_falls_back_to_json() {
        let config = TracingConfig::from_lookup(lookup(&[(FORMAT_ENV, "xml")]));
        assert_eq!(config.format, LogFormat::Json);
        assert!(matches!(
            "xml".parse::<LogFormat>(),
            Err(ObservabilityError::UnknownFormat(_))
        ));
    }

    #[test]
    fn invalid_filter_is_rejected_before_install() {
        let config = TracingConfig {
            filter: "railyard_core=notalevel".to_string(),
            format: LogFormat::Text,
        };

        assert!(matches!(
            init_with(&config),
            Err(ObservabilityError::InvalidFilter(_))
        ));
    }

    #[test]
    fn init_is_idempotent() {
        init();
        init();
        ::tracing::info!("tracing initialized twice without panicking");
    }
}
