//! Operator timezone configuration.

use chrono::FixedOffset;
use serde::Deserialize;

const fn default_utc_offset_hours() -> i32 {
    9
}

/// Fixed offset applied to notification timestamps.
#[derive(Debug, Clone, Deserialize)]
pub struct TimeConfig {
    /// Hours east of UTC (default: 9).
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: i32,
}

impl TimeConfig {
    /// The configured offset, `None` when out of range.
    #[must_use]
    pub fn offset(&self) -> Option<FixedOffset> {
        self.utc_offset_hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
    }
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            utc_offset_hours: default_utc_offset_hours(),
        }
    }
}
