//! Structured log sink.

use async_trait::async_trait;
use tracing::info;

use crate::domain::NotificationText;
use crate::error::Result;
use crate::port::NotificationSink;

/// A sink that records every notification through `tracing`.
///
/// Serves as the audit trail, and as the only channel when no webhook is
/// configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

#[async_trait]
impl NotificationSink for LogSink {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn deliver(&self, text: &NotificationText) -> Result<()> {
        info!(sink = self.name(), "{}", text);
        Ok(())
    }
}
