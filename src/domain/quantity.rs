//! Quantity resolution: which representation of an order's size to report.
//!
//! Venues disagree on what they echo back for an order. Some report a
//! monetary cost, some a unit amount, some nothing at all, and contract-based
//! derivatives venues report contracts. [`resolve_quantity`] classifies an
//! order into a [`Route`] and then picks the label and value for the route
//! and the intent's [`Sizing`].
//!
//! Rules are evaluated in order and the first match wins:
//!
//! | Route          | Guard                                          |
//! |----------------|------------------------------------------------|
//! | `CostBasedBuy` | spot buy on a cost-based venue                 |
//! | `StockVenue`   | venue is a stock market                        |
//! | `Unfilled`     | result carries no `amount`                     |
//! | `Filled`       | result carries an `amount`                     |

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

use super::error::DomainError;
use super::order::{OrderIntent, OrderResult, Sizing, VenueInfo};
use super::venue::{CostSource, VenueClassification, VenueId};

/// Label describing what a resolved quantity value represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuantityLabel {
    Cost,
    Percent,
    Quantity,
    /// Contract count with the equivalent units in parentheses.
    ContractsUnits,
    /// Percent with the derived unit amount in parentheses.
    PercentQuantity,
    /// Percent with the derived contract amount in parentheses.
    PercentContracts,
    Contracts,
    /// Contract count with the fill cost in parentheses.
    ContractsCost,
}

impl QuantityLabel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cost => "cost",
            Self::Percent => "percent",
            Self::Quantity => "quantity",
            Self::ContractsUnits => "contracts(units)",
            Self::PercentQuantity => "percent(quantity)",
            Self::PercentContracts => "percent(contracts)",
            Self::Contracts => "contracts",
            Self::ContractsCost => "contracts(cost)",
        }
    }

    const fn percent_of(is_contract: bool) -> Self {
        if is_contract {
            Self::PercentContracts
        } else {
            Self::PercentQuantity
        }
    }
}

impl fmt::Display for QuantityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A label and its rendered value, built fresh for every notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedQuantity {
    label: QuantityLabel,
    value: String,
}

impl ResolvedQuantity {
    fn new(label: QuantityLabel, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }

    #[must_use]
    pub fn label(&self) -> QuantityLabel {
        self.label
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ResolvedQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// Classification of an order for quantity reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    CostBasedBuy(CostSource),
    StockVenue,
    Unfilled,
    Filled { amount: Decimal },
}

fn route(
    venue: &VenueId,
    intent: &OrderIntent,
    result: &OrderResult,
    venues: &VenueClassification,
) -> Result<Route, DomainError> {
    if !intent.is_futures && intent.is_buy {
        if let Some(source) = venues.cost_source(venue) {
            return Ok(Route::CostBasedBuy(source));
        }
    }
    if venues.is_stock(venue) {
        return Ok(Route::StockVenue);
    }
    Ok(match result.amount()? {
        None => Route::Unfilled,
        Some(amount) => Route::Filled { amount },
    })
}

/// Resolve the quantity label and value for one order.
///
/// # Errors
///
/// Returns a [`DomainError`] when the matched rule needs a field that the
/// intent or result does not carry (e.g. the cost on a cost-reporting venue,
/// or the contract size on a contract-count venue).
pub fn resolve_quantity(
    venue: &VenueId,
    intent: &OrderIntent,
    result: &OrderResult,
    venues: &VenueClassification,
) -> Result<ResolvedQuantity, DomainError> {
    let resolved = match route(venue, intent, result, venues)? {
        Route::CostBasedBuy(source) => match intent.sizing()? {
            Sizing::Amount(amount) => ResolvedQuantity::new(
                QuantityLabel::Cost,
                cost_value(source, venue, amount, intent, result)?,
            ),
            Sizing::Percent { percent, .. } => percent_only(percent),
        },
        Route::StockVenue => match intent.sizing()? {
            Sizing::Amount(amount) => {
                ResolvedQuantity::new(QuantityLabel::Quantity, amount.to_string())
            }
            Sizing::Percent { percent, .. } => percent_only(percent),
        },
        Route::Unfilled => match intent.sizing()? {
            Sizing::Amount(amount) if intent.is_futures && venues.is_contract_count(venue) => {
                contracts_with_units(venue, amount, intent.contract_size)?
            }
            Sizing::Amount(amount) => {
                ResolvedQuantity::new(QuantityLabel::Quantity, amount.to_string())
            }
            Sizing::Percent {
                percent,
                derived: Some(derived),
            } => ResolvedQuantity::new(
                QuantityLabel::percent_of(intent.is_contract),
                format!("{percent}%({derived})"),
            ),
            Sizing::Percent { percent, .. } => percent_only(percent),
        },
        Route::Filled { amount } if intent.contract_size.is_some() => match result.cost()? {
            Some(cost) => ResolvedQuantity::new(
                QuantityLabel::ContractsCost,
                format!("{amount}({})", two_decimals(cost)),
            ),
            None => ResolvedQuantity::new(QuantityLabel::Contracts, amount.to_string()),
        },
        Route::Filled { amount } => match intent.sizing()? {
            Sizing::Amount(_) => ResolvedQuantity::new(QuantityLabel::Quantity, amount.to_string()),
            Sizing::Percent { percent, .. } => ResolvedQuantity::new(
                QuantityLabel::percent_of(intent.is_contract),
                format!("{percent}%({amount})"),
            ),
        },
    };

    Ok(resolved)
}

fn percent_only(percent: Decimal) -> ResolvedQuantity {
    ResolvedQuantity::new(QuantityLabel::Percent, format!("{percent}%"))
}

fn cost_value(
    source: CostSource,
    venue: &VenueId,
    amount: Decimal,
    intent: &OrderIntent,
    result: &OrderResult,
) -> Result<String, DomainError> {
    let missing = |field| DomainError::MissingField {
        field,
        venue: venue.to_string(),
    };

    let cost = match source {
        CostSource::ResultCost => result.cost()?.ok_or_else(|| missing("cost"))?,
        CostSource::AmountTimesPrice => {
            let price = intent.price.ok_or_else(|| missing("price"))?;
            amount
                .checked_mul(price)
                .ok_or_else(|| DomainError::InvalidField {
                    field: "price",
                    reason: format!("{amount} x {price} overflows"),
                })?
        }
        CostSource::InfoOrderQty => VenueInfo::order_qty(venue, result)?.quantity(),
    };

    Ok(cost.to_string())
}

fn contracts_with_units(
    venue: &VenueId,
    amount: Decimal,
    contract_size: Option<Decimal>,
) -> Result<ResolvedQuantity, DomainError> {
    let contract_size = contract_size.ok_or_else(|| DomainError::MissingField {
        field: "contract_size",
        venue: venue.to_string(),
    })?;
    if contract_size.is_zero() {
        return Err(DomainError::ZeroContractSize {
            venue: venue.to_string(),
        });
    }

    let overflow = || DomainError::InvalidField {
        field: "contract_size",
        reason: format!("{amount} / {contract_size} overflows"),
    };
    let contracts = amount.checked_div(contract_size).ok_or_else(overflow)?.floor();
    let units = contract_size.checked_mul(contracts).ok_or_else(overflow)?;

    Ok(ResolvedQuantity::new(
        QuantityLabel::ContractsUnits,
        format!("{contracts}({units})"),
    ))
}

/// Render a cost with exactly two decimal places.
fn two_decimals(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    format!("{rounded:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn result(json: &str) -> OrderResult {
        OrderResult::from_json(json).unwrap()
    }

    fn intent(exchange: &str) -> OrderIntent {
        OrderIntent {
            exchange: VenueId::new(exchange),
            base: "BTC".into(),
            quote: "USDT".into(),
            is_crypto: true,
            ..OrderIntent::default()
        }
    }

    fn resolve(intent: &OrderIntent, result: &OrderResult) -> Result<ResolvedQuantity, DomainError> {
        resolve_quantity(
            &intent.exchange,
            intent,
            result,
            &VenueClassification::default(),
        )
    }

    #[test]
    fn test_label_strings() {
        assert_eq!(QuantityLabel::ContractsUnits.as_str(), "contracts(units)");
        assert_eq!(QuantityLabel::PercentContracts.to_string(), "percent(contracts)");
        assert_eq!(QuantityLabel::percent_of(false), QuantityLabel::PercentQuantity);
    }

    #[test]
    fn test_route_cost_based_requires_spot_buy() {
        let venues = VenueClassification::default();
        let venue = VenueId::new("UPBIT");
        let empty = result("{}");

        let mut spot_buy = intent("UPBIT");
        spot_buy.is_buy = true;
        assert_eq!(
            route(&venue, &spot_buy, &empty, &venues).unwrap(),
            Route::CostBasedBuy(CostSource::ResultCost)
        );

        let mut futures_buy = spot_buy.clone();
        futures_buy.is_futures = true;
        assert_eq!(
            route(&venue, &futures_buy, &empty, &venues).unwrap(),
            Route::Unfilled
        );

        let mut spot_sell = intent("UPBIT");
        spot_sell.is_sell = true;
        assert_eq!(
            route(&venue, &spot_sell, &result(r#"{"amount": 2}"#), &venues).unwrap(),
            Route::Filled { amount: dec!(2) }
        );
    }

    #[test]
    fn test_route_stock_precedes_result_shape() {
        let venues = VenueClassification::default();
        let mut order = intent("NASDAQ");
        order.is_buy = true;
        assert_eq!(
            route(
                &VenueId::new("NASDAQ"),
                &order,
                &result(r#"{"amount": 1}"#),
                &venues
            )
            .unwrap(),
            Route::StockVenue
        );
    }

    #[test]
    fn test_two_decimals() {
        assert_eq!(two_decimals(dec!(1000.005)), "1000.00");
        // exact decimal midpoint rounds to even
        assert_eq!(two_decimals(dec!(1000.015)), "1000.02");
        assert_eq!(two_decimals(dec!(5)), "5.00");
        assert_eq!(two_decimals(dec!(12.3)), "12.30");
    }

    #[test]
    fn test_upbit_amount_reads_result_cost() {
        let mut order = intent("UPBIT");
        order.is_buy = true;
        order.amount = Some(dec!(0.01));

        let resolved = resolve(&order, &result(r#"{"cost": 50000.5}"#)).unwrap();
        assert_eq!(resolved.label(), QuantityLabel::Cost);
        assert_eq!(resolved.value(), "50000.5");
    }

    #[test]
    fn test_upbit_missing_cost_fails_fast() {
        let mut order = intent("UPBIT");
        order.is_buy = true;
        order.amount = Some(dec!(0.01));

        assert_eq!(
            resolve(&order, &result("{}")),
            Err(DomainError::MissingField {
                field: "cost",
                venue: "UPBIT".into()
            })
        );
    }

    #[test]
    fn test_bitget_amount_times_price() {
        let mut order = intent("BITGET");
        order.is_buy = true;
        order.amount = Some(dec!(2));
        order.price = Some(dec!(1.5));

        let resolved = resolve(&order, &result("{}")).unwrap();
        assert_eq!(resolved.label(), QuantityLabel::Cost);
        assert_eq!(resolved.value(), "3.0");
    }

    #[test]
    fn test_bitget_without_price_fails_fast() {
        let mut order = intent("BITGET");
        order.is_buy = true;
        order.amount = Some(dec!(2));

        assert_eq!(
            resolve(&order, &result("{}")),
            Err(DomainError::MissingField {
                field: "price",
                venue: "BITGET".into()
            })
        );
    }

    #[test]
    fn test_bybit_spot_reads_order_qty() {
        let mut order = intent("BYBIT");
        order.is_buy = true;
        order.amount = Some(dec!(100));

        let resolved = resolve(&order, &result(r#"{"info": {"orderQty": "100.5"}}"#)).unwrap();
        assert_eq!(resolved.label(), QuantityLabel::Cost);
        assert_eq!(resolved.value(), "100.5");

        assert_eq!(
            resolve(&order, &result(r#"{"info": {}}"#)),
            Err(DomainError::MissingField {
                field: "info.orderQty",
                venue: "BYBIT".into()
            })
        );
    }

    #[test]
    fn test_cost_based_percent() {
        let mut order = intent("UPBIT");
        order.is_buy = true;
        order.percent = Some(dec!(30));

        let resolved = resolve(&order, &result("{}")).unwrap();
        assert_eq!(resolved.label(), QuantityLabel::Percent);
        assert_eq!(resolved.value(), "30%");
    }

    #[test]
    fn test_contract_count_division_by_zero() {
        let mut order = intent("OKX");
        order.is_futures = true;
        order.amount = Some(dec!(10));
        order.contract_size = Some(dec!(0));

        assert_eq!(
            resolve(&order, &result("{}")),
            Err(DomainError::ZeroContractSize {
                venue: "OKX".into()
            })
        );
    }

    #[test]
    fn test_contract_count_division_overflow() {
        let order: OrderIntent = serde_json::from_str(
            r#"{"exchange": "OKX", "is_futures": true,
                "amount": "79228162514264337593543950335", "contract_size": "0.1"}"#,
        )
        .unwrap();

        assert!(matches!(
            resolve(&order, &result("{}")),
            Err(DomainError::InvalidField {
                field: "contract_size",
                ..
            })
        ));
    }

    #[test]
    fn test_contract_count_requires_contract_size() {
        let mut order = intent("OKX");
        order.is_futures = true;
        order.amount = Some(dec!(10));

        assert_eq!(
            resolve(&order, &result("{}")),
            Err(DomainError::MissingField {
                field: "contract_size",
                venue: "OKX".into()
            })
        );
    }

    #[test]
    fn test_contracts_with_fractional_contract_size() {
        let resolved =
            contracts_with_units(&VenueId::new("OKX"), dec!(0.25), Some(dec!(0.01))).unwrap();
        assert_eq!(resolved.value(), "25(0.25)");
    }

    #[test]
    fn test_filled_contracts_ignores_missing_sizing() {
        let mut order = intent("BINANCE");
        order.is_futures = true;
        order.contract_size = Some(dec!(1));

        let resolved = resolve(&order, &result(r#"{"amount": 4}"#)).unwrap();
        assert_eq!(resolved.label(), QuantityLabel::Contracts);
        assert_eq!(resolved.value(), "4");
    }

    #[test]
    fn test_missing_sizing_on_generic_path() {
        let order = intent("BINANCE");
        assert!(matches!(
            resolve(&order, &result("{}")),
            Err(DomainError::MissingSizing { .. })
        ));
    }

    #[test]
    fn test_display() {
        let resolved = ResolvedQuantity::new(QuantityLabel::Percent, "50%");
        assert_eq!(resolved.to_string(), "percent: 50%");
    }
}
