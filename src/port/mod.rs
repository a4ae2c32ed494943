//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!        ┌──────────────────────────┐
//!        │   Application            │
//!        │   (OrderNotifier)        │
//!        └────────────┬─────────────┘
//!                     │ NotificationSink
//!          ┌──────────┴──────────┐
//!          ▼                     ▼
//!     ┌─────────┐          ┌───────────┐
//!     │   Log   │          │  Webhook  │
//!     │  Sink   │          │   Sink    │
//!     └─────────┘          └───────────┘
//! ```

mod notifier;

pub use notifier::{NotificationSink, NullSink, SinkRegistry};
