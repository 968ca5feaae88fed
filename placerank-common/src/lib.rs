//! Shared types and utilities for the placerank workspace.
//!
//! This crate defines the runtime configuration, shared error types, and
//! observability helpers used by the other placerank crates. It is
//! intentionally lightweight so every crate can depend on it without heavy
//! transitive costs.
//!
//! - [`PlaceConfig`]: runtime knobs for the browser session
//! - [`observability`]: centralised tracing/logging initialisation
//! - [`PlaceError`] and [`Result`]: shared error handling
use serde::{Deserialize, Serialize};

pub mod observability;

/// Default WebDriver endpoint (a locally running Chromedriver).
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:9515";

/// Runtime configuration for a rank lookup session.
///
/// There is no configuration file; callers populate this from CLI flags and
/// environment overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceConfig {
    /// WebDriver service endpoint the browser session connects to.
    pub webdriver_url: String,
    /// Whether to run the browser without a visible window.
    pub headless: bool,
}

impl Default for PlaceConfig {
    fn default() -> Self {
        Self {
            webdriver_url: DEFAULT_WEBDRIVER_URL.to_string(),
            headless: true,
        }
    }
}

/// Error types used across the placerank system.
///
/// Lookup failures inside a running session never surface through this enum;
/// the finder recovers them into a not-found result. These variants cover
/// failures that happen before a session exists or in the caller itself.
#[derive(thiserror::Error, Debug)]
pub enum PlaceError {
    /// The WebDriver service could not be reached or refused the session.
    #[error("Driver error: {0}")]
    Driver(#[from] anyhow::Error),

    /// Caller input was incomplete or invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenient alias for results that use [`PlaceError`].
pub type Result<T> = std::result::Result<T, PlaceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_local_chromedriver() {
        let cfg = PlaceConfig::default();
        assert_eq!(cfg.webdriver_url, DEFAULT_WEBDRIVER_URL);
        assert!(cfg.headless);
    }
}
