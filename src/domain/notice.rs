//! Operator notices other than order fills: hedges, errors and alert digests.

use std::error::Error as StdError;
use std::fmt;

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;

use super::message::{format_timestamp, NotificationText};
use super::order::OrderIntent;

/// Venue every hedge is paired against.
pub const HEDGE_COUNTER_VENUE: &str = "UPBIT";

/// Whether a hedge is being opened or closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HedgeState {
    On,
    Off,
}

impl HedgeState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::On => "hedge",
            Self::Off => "hedge close",
        }
    }
}

impl fmt::Display for HedgeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A hedge between a derivatives venue and the KRW spot counter venue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HedgeNotice {
    pub exchange: String,
    pub base: String,
    pub quote: String,
    pub exchange_amount: Decimal,
    pub counter_amount: Decimal,
    pub state: HedgeState,
}

#[must_use]
pub fn compose_hedge(notice: &HedgeNotice, at: &DateTime<FixedOffset>) -> NotificationText {
    let HedgeNotice {
        exchange,
        base,
        quote,
        exchange_amount,
        counter_amount,
        state,
    } = notice;
    let counter = HEDGE_COUNTER_VENUE;
    let amounts = format!("{exchange}:{exchange_amount} {counter}:{counter_amount}");

    NotificationText::new(format!(
        "**Hedge**: {base} ==> {amounts}\n\
         **Date**: {date}\n\
         **Exchange**: {exchange}-{counter}\n\
         **Symbol**: {base}/{quote}-{base}/KRW\n\
         **Side**: {state}\n\
         **Quantity**: {amounts}",
        date = format_timestamp(at),
    ))
}

/// Notice for a named failure outside order execution.
#[must_use]
pub fn compose_error(name: &str, error: &str) -> NotificationText {
    NotificationText::new(format!("[{name} error occurred]\n{error}"))
}

/// Notice for a failed order, one error cause per line.
#[must_use]
pub fn compose_order_error(error: &(dyn StdError + 'static)) -> NotificationText {
    NotificationText::new(format!("[order error occurred]\n{}", error_chain(error)))
}

/// Render an error and its sources, outermost first.
#[must_use]
pub fn error_chain(error: &(dyn StdError + 'static)) -> String {
    let mut lines = vec![error.to_string()];
    let mut source = error.source();
    while let Some(cause) = source {
        lines.push(format!("  caused by: {cause}"));
        source = cause.source();
    }
    lines.join("\n")
}

/// Digest of an incoming alert, one `key: value` line per populated field.
#[must_use]
pub fn compose_alert(intent: &OrderIntent) -> NotificationText {
    let mut msg = format!(
        "[webhook alert_message] {}\n",
        intent.order_name.as_deref().unwrap_or_default()
    );
    for (key, value) in intent.populated_fields() {
        msg.push_str(&format!("{key}: {value}\n"));
    }
    NotificationText::new(msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    use crate::domain::VenueId;

    #[derive(Debug)]
    struct Outer(Inner);

    #[derive(Debug)]
    struct Inner;

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "order rejected")
        }
    }

    impl fmt::Display for Inner {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "insufficient balance")
        }
    }

    impl StdError for Outer {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(&self.0)
        }
    }

    impl StdError for Inner {}

    #[test]
    fn test_compose_hedge() {
        let at = FixedOffset::east_opt(9 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 5, 2, 14, 0, 1)
            .unwrap();
        let notice = HedgeNotice {
            exchange: "BINANCE".into(),
            base: "ETH".into(),
            quote: "USDT".into(),
            exchange_amount: dec!(1.5),
            counter_amount: dec!(1.5),
            state: HedgeState::On,
        };

        let text = compose_hedge(&notice, &at);
        let lines: Vec<_> = text.as_str().lines().collect();
        assert_eq!(lines[0], "**Hedge**: ETH ==> BINANCE:1.5 UPBIT:1.5");
        assert_eq!(lines[1], "**Date**: 24-05-02 14:00:01");
        assert_eq!(lines[2], "**Exchange**: BINANCE-UPBIT");
        assert_eq!(lines[3], "**Symbol**: ETH/USDT-ETH/KRW");
        assert_eq!(lines[4], "**Side**: hedge");
        assert_eq!(lines[5], "**Quantity**: BINANCE:1.5 UPBIT:1.5");

        let closed = HedgeNotice {
            state: HedgeState::Off,
            ..notice
        };
        assert!(compose_hedge(&closed, &at)
            .as_str()
            .contains("**Side**: hedge close"));
    }

    #[test]
    fn test_compose_error() {
        let text = compose_error("binance balance", "timeout");
        assert_eq!(text.as_str(), "[binance balance error occurred]\ntimeout");
    }

    #[test]
    fn test_compose_order_error_walks_sources() {
        let text = compose_order_error(&Outer(Inner));
        assert_eq!(
            text.as_str(),
            "[order error occurred]\norder rejected\n  caused by: insufficient balance"
        );
    }

    #[test]
    fn test_compose_alert() {
        let intent = OrderIntent {
            order_name: Some("rsi-long".into()),
            exchange: VenueId::new("OKX"),
            base: "BTC".into(),
            quote: "USDT".into(),
            is_futures: true,
            percent: Some(dec!(10)),
            ..OrderIntent::default()
        };

        let text = compose_alert(&intent);
        let mut lines = text.as_str().lines();
        assert_eq!(lines.next(), Some("[webhook alert_message] rsi-long"));
        assert_eq!(lines.next(), Some("order_name: rsi-long"));
        assert_eq!(lines.next(), Some("exchange: OKX"));
        assert!(text.as_str().contains("percent: 10\n"));
        assert!(!text.as_str().contains("amount:"));
    }
}
