//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::{info, warn};

#[cfg(feature = "webhook")]
use std::time::Duration;

#[cfg(feature = "webhook")]
use crate::adapter::outbound::notifier::{WebhookSink, WebhookSinkConfig};
use crate::adapter::outbound::notifier::LogSink;
use crate::application::OrderNotifier;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::SinkRegistry;

/// Build the sink registry from configuration.
///
/// The log sink is always registered. The webhook sink is added when a URL
/// is configured and the `webhook` feature is enabled.
///
/// # Errors
///
/// Returns an error if the webhook HTTP client cannot be built.
pub fn build_sink_registry(config: &Config) -> Result<SinkRegistry> {
    let mut registry = SinkRegistry::new();
    registry.register(Arc::new(LogSink));

    match &config.webhook.url {
        #[cfg(feature = "webhook")]
        Some(url) => {
            let sink = WebhookSink::new(WebhookSinkConfig {
                url: url.clone(),
                timeout: Duration::from_secs(config.webhook.timeout_secs),
            })?;
            registry.register(Arc::new(sink));
            info!("Webhook sink enabled");
        }
        #[cfg(not(feature = "webhook"))]
        Some(_) => {
            warn!("Webhook URL configured but the webhook feature is disabled");
        }
        None => {
            warn!("No webhook URL configured; notifications go to the log only");
        }
    }

    Ok(registry)
}

/// Build the order notifier from configuration.
///
/// # Errors
///
/// Returns an error if a sink cannot be constructed.
pub fn build_notifier(config: &Config) -> Result<OrderNotifier> {
    let sinks = build_sink_registry(config)?;
    Ok(OrderNotifier::new(
        Arc::new(config.classification()),
        config.offset(),
        sinks,
    ))
}
