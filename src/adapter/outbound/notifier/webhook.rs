//! Webhook delivery sink.
//!
//! Posts each notification as `{"content": "<text>"}` to an automation
//! webhook endpoint. Requires the `webhook` feature to be enabled.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::domain::NotificationText;
use crate::error::{Error, Result};
use crate::port::NotificationSink;

/// Webhook sink configuration.
#[derive(Debug, Clone)]
pub struct WebhookSinkConfig {
    /// Endpoint receiving the POST.
    pub url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

/// Sink that POSTs notifications to a webhook URL.
#[derive(Debug)]
pub struct WebhookSink {
    /// HTTP client for webhook requests.
    client: Client,
    url: String,
}

#[derive(Serialize)]
struct Payload<'a> {
    content: &'a str,
}

impl WebhookSink {
    /// Create a sink with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: WebhookSinkConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            url: config.url,
        })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl NotificationSink for WebhookSink {
    fn name(&self) -> &'static str {
        "webhook"
    }

    async fn deliver(&self, text: &NotificationText) -> Result<()> {
        let response = self
            .client
            .post(&self.url)
            .json(&Payload {
                content: text.as_str(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Delivery {
                sink: self.name(),
                status: status.as_u16(),
                body,
            });
        }

        debug!(status = status.as_u16(), "Webhook delivered");
        Ok(())
    }
}
