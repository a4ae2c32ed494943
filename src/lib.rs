//! Tradenote - order-result notifications for multi-venue trading bots.
//!
//! This crate turns the raw response of an exchange order call, together with
//! the order that was requested, into one human-readable notification and
//! delivers it to operator-facing sinks.
//!
//! # Architecture
//!
//! - **`domain`** - Pure interpretation and formatting logic
//!   - [`domain::resolve_quantity`] - picks the quantity representation
//!     (cost, percent, amount, contracts) and its label
//!   - [`domain::compose_order_message`] - renders the stock or crypto template
//!   - [`domain::VenueClassification`] - immutable venue lookup tables
//!
//! - **`port`** - The [`port::NotificationSink`] trait and sink registry
//! - **`adapter`** - Log and webhook sinks, plus the CLI
//! - **`application`** - [`application::OrderNotifier`], which wires the
//!   domain to the configured sinks
//! - **`infrastructure`** - TOML configuration, logging and bootstrap
//!
//! # Features
//!
//! - `webhook` - Enable HTTP webhook delivery (default)
//!
//! # Example
//!
//! ```
//! use chrono::{FixedOffset, TimeZone};
//! use rust_decimal_macros::dec;
//! use tradenote::domain::{
//!     compose_order_message, resolve_quantity, OrderIntent, OrderResult, VenueClassification,
//!     VenueId,
//! };
//!
//! let venues = VenueClassification::default();
//! let venue = VenueId::new("BINANCE");
//! let intent = OrderIntent {
//!     exchange: venue.clone(),
//!     base: "BTC".into(),
//!     quote: "USDT".into(),
//!     is_crypto: true,
//!     is_buy: true,
//!     amount: Some(dec!(0.5)),
//!     ..OrderIntent::default()
//! };
//! let result = OrderResult::from_json(r#"{"side": "buy", "amount": 0.5}"#).unwrap();
//!
//! let quantity = resolve_quantity(&venue, &intent, &result, &venues).unwrap();
//! let at = FixedOffset::east_opt(9 * 3600)
//!     .unwrap()
//!     .with_ymd_and_hms(2024, 3, 1, 9, 30, 0)
//!     .unwrap();
//! let text = compose_order_message(&venue, &intent, &result, &at, &quantity, &venues);
//! assert!(text.as_str().contains("BTC/USDT"));
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
