//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file. The webhook URL, which usually
//! embeds a secret, can be overridden from `WEBHOOK_URL` with
//! [`Config::with_env_overrides`].
//!
//! # Example
//!
//! ```no_run
//! use tradenote::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?.with_env_overrides()?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use chrono::{FixedOffset, Offset, Utc};
use serde::Deserialize;

use super::logging::LoggingConfig;
use super::time::TimeConfig;
use super::venues::VenueConfig;
use super::webhook::{WebhookConfig, WEBHOOK_URL_ENV};
use crate::domain::VenueClassification;
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Every section is optional; an empty file yields the defaults. Load from a
/// TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Timezone used for notification timestamps.
    #[serde(default)]
    pub time: TimeConfig,

    /// Webhook delivery settings.
    #[serde(default)]
    pub webhook: WebhookConfig,

    /// Venue classification tables.
    #[serde(default)]
    pub venues: VenueConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML content is malformed
    /// - Validation fails (e.g., an out-of-range UTC offset)
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Apply the `WEBHOOK_URL` environment override and revalidate.
    ///
    /// # Errors
    ///
    /// Returns an error if the overridden configuration fails validation.
    #[allow(clippy::result_large_err)]
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_webhook_url(std::env::var(WEBHOOK_URL_ENV).ok())
    }

    /// Replace the webhook URL when `url` is set, then revalidate.
    ///
    /// # Errors
    ///
    /// Returns an error if the new URL fails validation.
    #[allow(clippy::result_large_err)]
    pub fn with_webhook_url(mut self, url: Option<String>) -> Result<Self> {
        if let Some(url) = url {
            self.webhook.url = Some(url);
            self.validate()?;
        }
        Ok(self)
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.time.offset().is_none() {
            return Err(ConfigError::InvalidValue {
                field: "utc_offset_hours",
                reason: "must be between -23 and 23".to_string(),
            }
            .into());
        }

        if self.webhook.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if let Some(url) = &self.webhook.url {
            if url.trim().is_empty() {
                return Err(ConfigError::MissingField { field: "url" }.into());
            }
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidValue {
                    field: "url",
                    reason: "must be an http(s) URL".to_string(),
                }
                .into());
            }
        }

        if self.venues.ids().any(|id| id.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "venues",
                reason: "venue ids cannot be empty".to_string(),
            }
            .into());
        }
        let stock: HashSet<&str> = self.venues.stock.iter().map(String::as_str).collect();
        if let Some(id) = self
            .venues
            .cost_based
            .keys()
            .find(|id| stock.contains(id.as_str()))
        {
            return Err(ConfigError::InvalidValue {
                field: "venues",
                reason: format!("{id} cannot be both a stock and a cost-based venue"),
            }
            .into());
        }

        Ok(())
    }

    /// Operator timezone offset, UTC if the configured one is out of range.
    #[must_use]
    pub fn offset(&self) -> FixedOffset {
        self.time.offset().unwrap_or_else(|| Utc.fix())
    }

    /// Venue lookup tables built from the `[venues]` section.
    #[must_use]
    pub fn classification(&self) -> VenueClassification {
        self.venues.classification()
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webhook_url_override_replaces_file_value() {
        let config = Config::parse_toml("[webhook]\nurl = \"https://a.example.com\"\n")
            .unwrap()
            .with_webhook_url(Some("https://b.example.com".into()))
            .unwrap();
        assert_eq!(config.webhook.url.as_deref(), Some("https://b.example.com"));
    }

    #[test]
    fn test_webhook_url_override_absent_keeps_file_value() {
        let config = Config::parse_toml("[webhook]\nurl = \"https://a.example.com\"\n")
            .unwrap()
            .with_webhook_url(None)
            .unwrap();
        assert_eq!(config.webhook.url.as_deref(), Some("https://a.example.com"));
    }

    #[test]
    fn test_webhook_url_override_is_validated() {
        let err = Config::default()
            .with_webhook_url(Some("not-a-url".into()))
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Config(ConfigError::InvalidValue { field: "url", .. })
        ));
    }
}
