//! Order intent and raw order result types.
//!
//! - [`OrderIntent`] - the order that was requested (structured)
//! - [`Sizing`] - how the intent sizes the order (amount or percent)
//! - [`OrderResult`] - the venue's raw response (loosely typed)
//! - [`VenueInfo`] - typed view of the result's venue-specific `info`
//!
//! # Examples
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tradenote::domain::{OrderResult, Sizing, OrderIntent};
//!
//! let intent = OrderIntent {
//!     percent: Some(dec!(50)),
//!     ..OrderIntent::default()
//! };
//! assert_eq!(
//!     intent.sizing().unwrap(),
//!     Sizing::Percent { percent: dec!(50), derived: None }
//! );
//!
//! let result = OrderResult::from_json(r#"{"side": "sell", "amount": "0.25"}"#).unwrap();
//! assert_eq!(result.side(), Some("sell"));
//! assert_eq!(result.amount().unwrap(), Some(dec!(0.25)));
//! assert_eq!(result.cost().unwrap(), None);
//! ```

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::DomainError;
use super::venue::VenueId;

/// The originally requested order.
///
/// Exactly one of `amount` and `percent` is expected to be set; this is a
/// convention of the caller and is not enforced here. When both are set the
/// amount wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderIntent {
    /// Alert name the order was triggered by.
    #[serde(default)]
    pub order_name: Option<String>,
    /// Venue the order was sent to.
    #[serde(default)]
    pub exchange: VenueId,
    /// Base currency or stock ticker.
    #[serde(default)]
    pub base: String,
    /// Quote currency.
    #[serde(default)]
    pub quote: String,
    #[serde(default)]
    pub is_futures: bool,
    #[serde(default)]
    pub is_crypto: bool,
    #[serde(default)]
    pub is_buy: bool,
    #[serde(default)]
    pub is_sell: bool,
    #[serde(default)]
    pub is_entry: bool,
    #[serde(default)]
    pub is_close: bool,
    /// Requested absolute amount.
    #[serde(default)]
    pub amount: Option<Decimal>,
    /// Requested percent of available balance.
    #[serde(default)]
    pub percent: Option<Decimal>,
    /// Absolute amount previously derived from `percent`.
    #[serde(default)]
    pub amount_by_percent: Option<Decimal>,
    /// Requested limit price.
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Units per contract on contract-based venues.
    #[serde(default)]
    pub contract_size: Option<Decimal>,
    /// Percent sizing is expressed in contracts rather than plain units.
    #[serde(default)]
    pub is_contract: bool,
}

/// How an intent sizes its order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sizing {
    /// Absolute amount.
    Amount(Decimal),
    /// Percent of balance, with the derived absolute amount when known.
    Percent {
        percent: Decimal,
        derived: Option<Decimal>,
    },
}

impl OrderIntent {
    /// Read the sizing mode of this intent.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingSizing`] when neither `amount` nor
    /// `percent` is set.
    pub fn sizing(&self) -> Result<Sizing, DomainError> {
        if let Some(amount) = self.amount {
            return Ok(Sizing::Amount(amount));
        }
        if let Some(percent) = self.percent {
            return Ok(Sizing::Percent {
                percent,
                derived: self.amount_by_percent,
            });
        }
        Err(DomainError::MissingSizing {
            venue: self.exchange.to_string(),
        })
    }

    /// Populated fields as `(name, value)` pairs in declaration order.
    ///
    /// Absent optional fields are skipped; flags are always listed.
    #[must_use]
    pub fn populated_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();
        let mut text = |name: &'static str, value: Option<String>| {
            if let Some(value) = value {
                fields.push((name, value));
            }
        };

        text("order_name", self.order_name.clone());
        text("exchange", non_empty(self.exchange.as_str()));
        text("base", non_empty(&self.base));
        text("quote", non_empty(&self.quote));
        text("is_futures", Some(self.is_futures.to_string()));
        text("is_crypto", Some(self.is_crypto.to_string()));
        text("is_buy", Some(self.is_buy.to_string()));
        text("is_sell", Some(self.is_sell.to_string()));
        text("is_entry", Some(self.is_entry.to_string()));
        text("is_close", Some(self.is_close.to_string()));
        text("amount", self.amount.map(|v| v.to_string()));
        text("percent", self.percent.map(|v| v.to_string()));
        text(
            "amount_by_percent",
            self.amount_by_percent.map(|v| v.to_string()),
        );
        text("price", self.price.map(|v| v.to_string()));
        text("contract_size", self.contract_size.map(|v| v.to_string()));
        text("is_contract", Some(self.is_contract.to_string()));

        fields
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

/// The venue's raw order response.
///
/// A string-keyed JSON object whose shape varies per venue. Keys holding
/// `null` are treated as absent; present numeric keys must hold a number or
/// a numeric string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderResult(Map<String, Value>);

impl OrderResult {
    /// Wrap an already-parsed JSON object.
    #[must_use]
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Parse a result from JSON text. The top level must be an object.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a JSON object.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Raw value of a top-level field, `None` when absent or `null`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    /// Side text as reported by the venue.
    #[must_use]
    pub fn side(&self) -> Option<&str> {
        self.get("side").and_then(Value::as_str)
    }

    /// Filled unit amount.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidField`] if the value is not numeric.
    pub fn amount(&self) -> Result<Option<Decimal>, DomainError> {
        self.get("amount")
            .map(|v| parse_decimal("amount", v))
            .transpose()
    }

    /// Monetary cost of the fill.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidField`] if the value is not numeric.
    pub fn cost(&self) -> Result<Option<Decimal>, DomainError> {
        self.get("cost").map(|v| parse_decimal("cost", v)).transpose()
    }
}

impl From<Map<String, Value>> for OrderResult {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

/// Typed view of the venue-specific `info` extension, one variant per venue
/// family that reports through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VenueInfo {
    /// Executed quantity echoed back as `info.orderQty`.
    OrderQty(Decimal),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderQtyInfo {
    order_qty: Option<Value>,
}

impl VenueInfo {
    /// Read the order-quantity family's view of `info`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingField`] when `info` or `info.orderQty`
    /// is absent, and [`DomainError::InvalidField`] when `info` is not an
    /// object or the quantity is not numeric.
    pub fn order_qty(venue: &VenueId, result: &OrderResult) -> Result<Self, DomainError> {
        let missing = || DomainError::MissingField {
            field: "info.orderQty",
            venue: venue.to_string(),
        };

        let info = result.get("info").ok_or_else(missing)?;
        let info: OrderQtyInfo =
            serde_json::from_value(info.clone()).map_err(|e| DomainError::InvalidField {
                field: "info",
                reason: e.to_string(),
            })?;
        let qty = info
            .order_qty
            .filter(|v| !v.is_null())
            .ok_or_else(missing)?;

        Ok(Self::OrderQty(parse_decimal("info.orderQty", &qty)?))
    }

    #[must_use]
    pub const fn quantity(self) -> Decimal {
        match self {
            Self::OrderQty(qty) => qty,
        }
    }
}

fn parse_decimal(field: &'static str, value: &Value) -> Result<Decimal, DomainError> {
    let text = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        other => {
            return Err(DomainError::InvalidField {
                field,
                reason: format!("expected a number, got {other}"),
            })
        }
    };

    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|e| DomainError::InvalidField {
            field,
            reason: format!("{text:?} is not a decimal: {e}"),
        })
}
