//! `check` commands.

use std::path::Path;

use anyhow::Result;

use super::{order::load_config, output};

/// Validate configuration file and print a summary.
pub fn execute_config(config_path: &Path) -> Result<()> {
    let config = load_config(Some(config_path))?;
    let venues = &config.venues;

    output::section("Configuration Check");
    output::field("Config", config_path.display());
    output::success("Configuration file is valid");

    output::section("Summary");
    output::field("Log level", &config.logging.level);
    output::field("Log format", &config.logging.format);
    output::field("UTC offset", format!("{:+}h", config.time.utc_offset_hours));
    output::field(
        "Cost-based",
        venues
            .cost_based
            .iter()
            .map(|(id, source)| format!("{id} ({source})"))
            .collect::<Vec<_>>()
            .join(", "),
    );
    output::field("Stock", venues.stock.join(", "));
    output::field("Contract count", venues.contract_count.join(", "));

    if config.webhook.is_enabled() {
        output::success("Webhook delivery configured");
        output::field("Timeout", format!("{}s", config.webhook.timeout_secs));
    } else {
        output::warning("No webhook URL configured (set WEBHOOK_URL); log delivery only");
    }

    Ok(())
}
