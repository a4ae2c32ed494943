//! Notification sink port.
//!
//! This module defines the trait for delivering composed notifications to
//! operator-facing channels such as a structured log or a webhook.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use crate::domain::NotificationText;
use crate::error::Result;

/// Trait for notification delivery backends.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - A non-success response from the backend must surface as an error; the
///   sink never retries on its own
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Short name used in logs and delivery errors.
    fn name(&self) -> &'static str;

    /// Deliver one notification.
    async fn deliver(&self, text: &NotificationText) -> Result<()>;
}

/// Registry of sinks (composite pattern).
///
/// Delivers every notification to all registered sinks.
#[derive(Clone, Default)]
pub struct SinkRegistry {
    sinks: Vec<Arc<dyn NotificationSink>>,
}

impl SinkRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { sinks: vec![] }
    }

    /// Register a sink.
    pub fn register(&mut self, sink: Arc<dyn NotificationSink>) {
        self.sinks.push(sink);
    }

    /// Deliver to every registered sink.
    ///
    /// All sinks are attempted even when one fails; the first failure is
    /// returned.
    pub async fn deliver_all(&self, text: &NotificationText) -> Result<()> {
        let mut first_error = None;
        for sink in &self.sinks {
            if let Err(e) = sink.deliver(text).await {
                error!(sink = sink.name(), error = %e, "Notification delivery failed");
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Names of registered sinks, in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.sinks.iter().map(|s| s.name()).collect()
    }

    /// Number of registered sinks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// Check if registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

/// A no-op sink for testing or when notifications are disabled.
pub struct NullSink;

#[async_trait]
impl NotificationSink for NullSink {
    fn name(&self) -> &'static str {
        "null"
    }

    async fn deliver(&self, _text: &NotificationText) -> Result<()> {
        Ok(())
    }
}
