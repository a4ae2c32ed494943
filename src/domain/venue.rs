//! Venue identifiers and the static venue classification tables.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Venues whose spot buys are sized by monetary cost, with their cost rule.
pub const COST_BASED_VENUES: [(&str, CostSource); 3] = [
    ("UPBIT", CostSource::ResultCost),
    ("BITGET", CostSource::AmountTimesPrice),
    ("BYBIT", CostSource::InfoOrderQty),
];

/// Traditional stock markets.
pub const STOCK_VENUES: [&str; 4] = ["KRX", "NASDAQ", "NYSE", "AMEX"];

/// Derivatives venues whose futures orders are sized in contracts.
pub const CONTRACT_COUNT_VENUES: [&str; 1] = ["OKX"];

/// Exchange identifier - newtype for type safety.
///
/// Identifiers are compared by identity; the canonical form is the
/// upper-case exchange name (e.g. `UPBIT`, `NASDAQ`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VenueId(String);

impl VenueId {
    /// Create a new `VenueId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the venue ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VenueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for VenueId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for VenueId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Where a cost-based venue reports the cost of an amount-sized buy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostSource {
    /// The `cost` field of the order result.
    ResultCost,
    /// Requested amount multiplied by requested price.
    AmountTimesPrice,
    /// The venue-specific `info.orderQty` field of the order result.
    InfoOrderQty,
}

impl fmt::Display for CostSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResultCost => write!(f, "result_cost"),
            Self::AmountTimesPrice => write!(f, "amount_times_price"),
            Self::InfoOrderQty => write!(f, "info_order_qty"),
        }
    }
}

/// Immutable lookup tables describing how each venue reports orders.
///
/// Built once at startup (from defaults or configuration) and shared by
/// reference afterwards. Venues absent from every table take the generic
/// quantity path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueClassification {
    cost_based: HashMap<VenueId, CostSource>,
    stock: HashSet<VenueId>,
    contract_count: HashSet<VenueId>,
}

impl VenueClassification {
    /// Build a classification from explicit tables.
    pub fn new(
        cost_based: impl IntoIterator<Item = (VenueId, CostSource)>,
        stock: impl IntoIterator<Item = VenueId>,
        contract_count: impl IntoIterator<Item = VenueId>,
    ) -> Self {
        Self {
            cost_based: cost_based.into_iter().collect(),
            stock: stock.into_iter().collect(),
            contract_count: contract_count.into_iter().collect(),
        }
    }

    /// Cost rule for a cost-based venue, `None` for every other venue.
    #[must_use]
    pub fn cost_source(&self, venue: &VenueId) -> Option<CostSource> {
        self.cost_based.get(venue).copied()
    }

    #[must_use]
    pub fn is_cost_based(&self, venue: &VenueId) -> bool {
        self.cost_based.contains_key(venue)
    }

    #[must_use]
    pub fn is_stock(&self, venue: &VenueId) -> bool {
        self.stock.contains(venue)
    }

    #[must_use]
    pub fn is_contract_count(&self, venue: &VenueId) -> bool {
        self.contract_count.contains(venue)
    }

    /// Number of venues across all tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cost_based.len() + self.stock.len() + self.contract_count.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for VenueClassification {
    fn default() -> Self {
        Self::new(
            COST_BASED_VENUES
                .iter()
                .map(|(id, source)| (VenueId::new(*id), *source)),
            STOCK_VENUES.iter().map(|id| VenueId::new(*id)),
            CONTRACT_COUNT_VENUES.iter().map(|id| VenueId::new(*id)),
        )
    }
}
