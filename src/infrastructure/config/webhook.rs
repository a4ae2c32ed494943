//! Webhook delivery configuration.

use serde::Deserialize;

/// Environment variable that overrides `webhook.url`.
pub const WEBHOOK_URL_ENV: &str = "WEBHOOK_URL";

const fn default_timeout_secs() -> u64 {
    10
}

/// Webhook delivery configuration.
///
/// When no URL is configured, notifications go to the log sink only.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookConfig {
    /// Endpoint receiving notifications.
    #[serde(default)]
    pub url: Option<String>,
    /// Request timeout in seconds (default: 10).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl WebhookConfig {
    /// True when a webhook endpoint is configured.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.url.is_some()
    }
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}
