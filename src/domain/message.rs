//! Order notification composition.
//!
//! Messages are blocks of sections separated by a blank line; each section
//! is a heading line followed by its value. Stock venues get a ticker and the
//! side computed from the intent; every other venue gets the full symbol and
//! the side text the venue reported.

use std::fmt;

use chrono::{DateTime, FixedOffset, TimeZone, Utc};

use super::order::{OrderIntent, OrderResult};
use super::quantity::ResolvedQuantity;
use super::venue::{VenueClassification, VenueId};

/// Timestamp layout used in every notification.
pub const TIMESTAMP_FORMAT: &str = "%y-%m-%d %H:%M:%S";

/// Direction of an order as shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SideLabel {
    LongEntry,
    ShortEntry,
    ShortClose,
    LongClose,
    Buy,
    Sell,
}

impl SideLabel {
    /// Derive the side label from the intent flags.
    ///
    /// Returns `None` for flag combinations that name no direction.
    #[must_use]
    pub fn from_intent(intent: &OrderIntent) -> Option<Self> {
        if intent.is_futures {
            if intent.is_entry {
                if intent.is_buy {
                    return Some(Self::LongEntry);
                }
                if intent.is_sell {
                    return Some(Self::ShortEntry);
                }
            } else if intent.is_close {
                if intent.is_buy {
                    return Some(Self::ShortClose);
                }
                if intent.is_sell {
                    return Some(Self::LongClose);
                }
            }
            return None;
        }

        if intent.is_buy {
            Some(Self::Buy)
        } else if intent.is_sell {
            Some(Self::Sell)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LongEntry => "long entry",
            Self::ShortEntry => "short entry",
            Self::ShortClose => "short close",
            Self::LongClose => "long close",
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

impl fmt::Display for SideLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Side text for an intent, empty when no direction applies.
#[must_use]
pub fn side_text(intent: &OrderIntent) -> &'static str {
    SideLabel::from_intent(intent).map_or("", SideLabel::as_str)
}

/// Render `base/quote`, marking perpetual crypto futures with a `.P` quote.
#[must_use]
pub fn symbol(intent: &OrderIntent) -> String {
    if intent.is_crypto && intent.is_futures {
        format!("{}/{}.P", intent.base, intent.quote)
    } else {
        format!("{}/{}", intent.base, intent.quote)
    }
}

/// Convert a UTC instant into the operator's fixed offset.
#[must_use]
pub fn local_time(at: DateTime<Utc>, offset: &FixedOffset) -> DateTime<FixedOffset> {
    offset.from_utc_datetime(&at.naive_utc())
}

#[must_use]
pub fn format_timestamp(at: &DateTime<FixedOffset>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// A fully composed notification. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NotificationText(String);

impl NotificationText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for NotificationText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NotificationText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn sections(parts: &[(&str, &str)]) -> String {
    parts
        .iter()
        .map(|(heading, body)| format!("{heading}\n{body}"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Compose the notification for one executed order.
#[must_use]
pub fn compose_order_message(
    venue: &VenueId,
    intent: &OrderIntent,
    result: &OrderResult,
    at: &DateTime<FixedOffset>,
    quantity: &ResolvedQuantity,
    venues: &VenueClassification,
) -> NotificationText {
    let date = format_timestamp(at);
    let label = quantity.label();

    let content = if venues.is_stock(venue) {
        sections(&[
            ("Date", date.as_str()),
            ("Exchange", venue.as_str()),
            ("Ticker", intent.base.as_str()),
            ("Side", side_text(intent)),
            (label.as_str(), quantity.value()),
        ])
    } else {
        let pair = symbol(intent);
        sections(&[
            ("Date", date.as_str()),
            ("Exchange", venue.as_str()),
            ("Symbol", pair.as_str()),
            ("Side", result.side().unwrap_or_default()),
            (label.as_str(), quantity.value()),
        ])
    };

    NotificationText::new(content)
}
