//! Notification adapters.
//!
//! Implements the `port::NotificationSink` trait for the log and webhook
//! backends.

mod log;

#[cfg(feature = "webhook")]
mod webhook;

pub use self::log::LogSink;

#[cfg(feature = "webhook")]
pub use self::webhook::{WebhookSink, WebhookSinkConfig};
