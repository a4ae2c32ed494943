//! Venue classification tables.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::{
    CostSource, VenueClassification, VenueId, CONTRACT_COUNT_VENUES, COST_BASED_VENUES,
    STOCK_VENUES,
};

fn default_cost_based() -> BTreeMap<String, CostSource> {
    COST_BASED_VENUES
        .iter()
        .map(|(id, source)| ((*id).to_string(), *source))
        .collect()
}

fn default_stock() -> Vec<String> {
    STOCK_VENUES.iter().map(|id| (*id).to_string()).collect()
}

fn default_contract_count() -> Vec<String> {
    CONTRACT_COUNT_VENUES
        .iter()
        .map(|id| (*id).to_string())
        .collect()
}

/// Venue classification as written in the config file.
///
/// Each table defaults independently, so overriding `stock` leaves the
/// cost-based table at its defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct VenueConfig {
    /// Cost-based venues and where their cost is read from.
    #[serde(default = "default_cost_based")]
    pub cost_based: BTreeMap<String, CostSource>,
    /// Traditional stock markets.
    #[serde(default = "default_stock")]
    pub stock: Vec<String>,
    /// Derivatives venues sized in contracts.
    #[serde(default = "default_contract_count")]
    pub contract_count: Vec<String>,
}

impl VenueConfig {
    /// Build the immutable lookup tables.
    #[must_use]
    pub fn classification(&self) -> VenueClassification {
        VenueClassification::new(
            self.cost_based
                .iter()
                .map(|(id, source)| (VenueId::new(id.as_str()), *source)),
            self.stock.iter().map(|id| VenueId::new(id.as_str())),
            self.contract_count.iter().map(|id| VenueId::new(id.as_str())),
        )
    }

    /// Every configured venue id, in table order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.cost_based
            .keys()
            .chain(self.stock.iter())
            .chain(self.contract_count.iter())
            .map(String::as_str)
    }
}

impl Default for VenueConfig {
    fn default() -> Self {
        Self {
            cost_based: default_cost_based(),
            stock: default_stock(),
            contract_count: default_contract_count(),
        }
    }
}
