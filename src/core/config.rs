//! Console configuration with documented constants
//!
//! All tunable values are collected here with explanations of their purpose.
//! A partial TOML file can overlay any subset of them.

use crate::core::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Configuration for the console dashboard
///
/// Timeline offsets and messages are deliberately NOT configurable; the
/// simulated deploy is a fixed, literal sequence (see `timeline`).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// How long the event loop blocks waiting for input (milliseconds)
    ///
    /// This bounds the latency of timeline steps: a due step fires at most
    /// one poll interval late. 50ms is imperceptible and keeps CPU idle.
    pub poll_interval_ms: u64,

    /// Prompt glyph shown before the input line
    pub prompt: String,

    /// Placeholder text shown while the input line is empty
    pub placeholder: String,

    /// Project name shown in the header breadcrumb
    pub project_name: String,

    /// Branch name shown in the active-project panel
    pub branch: String,

    /// Short commit hash shown in the active-project panel
    pub commit: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 50,
            prompt: "\u{276f}".to_string(),
            placeholder: "Enter command (try 'deploy' or 'help')...".to_string(),
            project_name: "autodeploy-agent".to_string(),
            branch: "main".to_string(),
            commit: "8f3a2c1".to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) TOML overlay on top of the defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config overlay from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        use crate::core::error::ConsoleError;

        // A zero interval would spin the loop; above 1s input feels dead.
        if self.poll_interval_ms == 0 || self.poll_interval_ms > 1000 {
            return Err(ConsoleError::InvalidConfig(format!(
                "poll_interval_ms ({}) must be in 1..=1000",
                self.poll_interval_ms
            )));
        }

        if self.project_name.is_empty() {
            return Err(ConsoleError::InvalidConfig(
                "project_name must not be empty".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ConsoleConfig::new().validate().is_ok());
    }

    #[test]
    fn test_partial_overlay_keeps_defaults() {
        let config = ConsoleConfig::from_toml_str("poll_interval_ms = 100").unwrap();
        assert_eq!(config.poll_interval_ms, 100);
        assert_eq!(config.branch, "main");
    }

    #[test]
    fn test_zero_poll_interval_rejected() {
        let err = ConsoleConfig::from_toml_str("poll_interval_ms = 0");
        assert!(err.is_err());
    }
}
