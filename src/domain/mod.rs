//! Exchange-agnostic interpretation and formatting logic.
//!
//! Everything here is a pure function of its inputs: no I/O, no logging and
//! no state retained between calls.

pub mod error;

mod message;
mod notice;
mod order;
mod quantity;
mod venue;

pub use error::DomainError;
pub use message::{
    compose_order_message, format_timestamp, local_time, side_text, symbol, NotificationText,
    SideLabel, TIMESTAMP_FORMAT,
};
pub use notice::{
    compose_alert, compose_error, compose_hedge, compose_order_error, error_chain, HedgeNotice,
    HedgeState, HEDGE_COUNTER_VENUE,
};
pub use order::{OrderIntent, OrderResult, Sizing, VenueInfo};
pub use quantity::{resolve_quantity, QuantityLabel, ResolvedQuantity};
pub use venue::{
    CostSource, VenueClassification, VenueId, CONTRACT_COUNT_VENUES, COST_BASED_VENUES,
    STOCK_VENUES,
};
