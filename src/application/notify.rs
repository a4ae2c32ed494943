//! Order notification service.
//!
//! Wires the pure resolver and composer to the configured sinks. The domain
//! functions never log; this service is where notifications and their
//! delivery failures become visible in the process log.

use std::error::Error as StdError;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Utc};
use tracing::{error, info, instrument};

use crate::domain::{
    compose_alert, compose_error, compose_hedge, compose_order_error, compose_order_message,
    error_chain, local_time, resolve_quantity, HedgeNotice, NotificationText, OrderIntent,
    OrderResult, VenueClassification, VenueId,
};
use crate::error::Result;
use crate::port::SinkRegistry;

/// Outcome of processing an incoming alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertOutcome {
    Succeeded,
    Failed,
}

/// Composes operator notifications and delivers them to every sink.
#[derive(Clone)]
pub struct OrderNotifier {
    venues: Arc<VenueClassification>,
    offset: FixedOffset,
    sinks: SinkRegistry,
}

impl OrderNotifier {
    #[must_use]
    pub fn new(venues: Arc<VenueClassification>, offset: FixedOffset, sinks: SinkRegistry) -> Self {
        Self {
            venues,
            offset,
            sinks,
        }
    }

    #[must_use]
    pub fn venues(&self) -> &VenueClassification {
        &self.venues
    }

    #[must_use]
    pub fn sinks(&self) -> &SinkRegistry {
        &self.sinks
    }

    /// Compose the order notification without delivering it.
    ///
    /// # Errors
    ///
    /// Returns a domain error when the order result lacks a field the
    /// matched quantity rule needs.
    pub fn render_order(
        &self,
        venue: &VenueId,
        intent: &OrderIntent,
        result: &OrderResult,
        at: DateTime<Utc>,
    ) -> Result<NotificationText> {
        let quantity = resolve_quantity(venue, intent, result, &self.venues)?;
        let local = local_time(at, &self.offset);
        Ok(compose_order_message(
            venue,
            intent,
            result,
            &local,
            &quantity,
            &self.venues,
        ))
    }

    /// Compose and deliver the notification for an executed order.
    ///
    /// # Errors
    ///
    /// Returns the composition error, or the first sink failure.
    pub async fn notify_order(
        &self,
        venue: &VenueId,
        intent: &OrderIntent,
        result: &OrderResult,
    ) -> Result<NotificationText> {
        self.notify_order_at(venue, intent, result, Utc::now()).await
    }

    /// Same as [`notify_order`](Self::notify_order) at an explicit instant.
    ///
    /// # Errors
    ///
    /// Returns the composition error, or the first sink failure.
    #[instrument(skip(self, venue, intent, result), fields(venue = %venue))]
    pub async fn notify_order_at(
        &self,
        venue: &VenueId,
        intent: &OrderIntent,
        result: &OrderResult,
        at: DateTime<Utc>,
    ) -> Result<NotificationText> {
        let text = self.render_order(venue, intent, result, at)?;
        self.sinks.deliver_all(&text).await?;
        Ok(text)
    }

    /// Deliver a hedge open/close notice.
    ///
    /// # Errors
    ///
    /// Returns the first sink failure.
    pub async fn notify_hedge(&self, notice: &HedgeNotice) -> Result<()> {
        let local = local_time(Utc::now(), &self.offset);
        let text = compose_hedge(notice, &local);
        self.sinks.deliver_all(&text).await
    }

    /// Deliver a notice for a named failure.
    ///
    /// # Errors
    ///
    /// Returns the first sink failure.
    pub async fn notify_error(&self, name: &str, message: &str) -> Result<()> {
        error!(name, error = %message, "Error occurred");
        self.sinks.deliver_all(&compose_error(name, message)).await
    }

    /// Deliver a notice for a failed order.
    ///
    /// # Errors
    ///
    /// Returns the first sink failure.
    pub async fn notify_order_error(
        &self,
        failure: &(dyn StdError + 'static),
        intent: Option<&OrderIntent>,
    ) -> Result<()> {
        let chain = error_chain(failure);
        match intent {
            Some(intent) => error!(
                order_name = intent.order_name.as_deref().unwrap_or_default(),
                venue = %intent.exchange,
                error = %chain,
                "Order error occurred"
            ),
            None => error!(error = %chain, "Error occurred"),
        }
        self.sinks.deliver_all(&compose_order_error(failure)).await
    }

    /// Deliver an alert validation failure verbatim.
    ///
    /// # Errors
    ///
    /// Returns the first sink failure.
    pub async fn notify_validation_error(&self, message: &str) -> Result<()> {
        error!(error = %message, "Validation error occurred");
        self.sinks.deliver_all(&NotificationText::new(message)).await
    }

    /// Deliver a digest of the alert that triggered an order.
    ///
    /// # Errors
    ///
    /// Returns the first sink failure.
    pub async fn notify_alert(&self, intent: &OrderIntent, outcome: AlertOutcome) -> Result<()> {
        let text = compose_alert(intent);
        self.sinks.deliver_all(&text).await?;

        let order_name = intent.order_name.as_deref().unwrap_or_default();
        match outcome {
            AlertOutcome::Succeeded => info!(order_name, "Alert processed"),
            AlertOutcome::Failed => error!(order_name, alert = %text, "Alert failed"),
        }
        Ok(())
    }
}
