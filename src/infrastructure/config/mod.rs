//! Infrastructure configuration modules.

pub mod logging;
pub mod settings;
pub mod time;
pub mod venues;
pub mod webhook;
