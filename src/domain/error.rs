//! Input-shape errors raised while interpreting an order result.
//!
//! Every branch that needs a field it cannot find fails with one of these;
//! no default is substituted.
//!
//! # Examples
//!
//! ```
//! use tradenote::domain::error::DomainError;
//! use tradenote::domain::{OrderIntent, VenueId};
//!
//! let intent = OrderIntent {
//!     exchange: VenueId::new("UPBIT"),
//!     ..OrderIntent::default()
//! };
//!
//! assert!(matches!(
//!     intent.sizing(),
//!     Err(DomainError::MissingSizing { .. })
//! ));
//! ```

use thiserror::Error;

/// Errors raised when an order intent or result lacks what a branch needs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field required by the matched branch is absent.
    #[error("missing field `{field}` required for venue {venue}")]
    MissingField {
        /// Name of the missing field (dotted for nested result fields).
        field: &'static str,
        /// Venue whose rule required the field.
        venue: String,
    },

    /// A field is present but cannot be read as the expected type.
    #[error("invalid value for `{field}`: {reason}")]
    InvalidField {
        /// Name of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The intent carries neither an absolute amount nor a percent.
    #[error("order for venue {venue} specifies neither amount nor percent")]
    MissingSizing {
        /// Venue of the order.
        venue: String,
    },

    /// Contract size of zero makes the contract count undefined.
    #[error("contract size for venue {venue} must be non-zero")]
    ZeroContractSize {
        /// Venue of the order.
        venue: String,
    },
}
