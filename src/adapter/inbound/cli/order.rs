//! `render` and `send` commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;

use super::{output, OrderArgs};
use crate::domain::{OrderIntent, OrderResult, VenueId};
use crate::infrastructure::bootstrap::build_notifier;
use crate::infrastructure::config::settings::Config;

/// An order loaded from the command line inputs.
#[derive(Debug)]
pub struct OrderInput {
    pub venue: VenueId,
    pub intent: OrderIntent,
    pub result: OrderResult,
}

/// Load configuration, falling back to defaults when no path is given.
///
/// `WEBHOOK_URL` overrides the configured webhook in both cases.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::default(),
    };
    config.with_env_overrides().context("applying WEBHOOK_URL")
}

/// Read intent and result JSON files.
pub fn read_order(args: &OrderArgs) -> Result<OrderInput> {
    let intent_json = fs::read_to_string(&args.intent)
        .with_context(|| format!("reading intent {}", args.intent.display()))?;
    let intent: OrderIntent = serde_json::from_str(&intent_json)
        .with_context(|| format!("parsing intent {}", args.intent.display()))?;

    let result_json = fs::read_to_string(&args.result)
        .with_context(|| format!("reading result {}", args.result.display()))?;
    let result = OrderResult::from_json(&result_json)
        .with_context(|| format!("parsing result {}", args.result.display()))?;

    let venue = args
        .venue
        .as_deref()
        .map_or_else(|| intent.exchange.clone(), VenueId::from);

    Ok(OrderInput {
        venue,
        intent,
        result,
    })
}

/// Compose the notification and print it.
pub fn execute_render(args: &OrderArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    config.init_logging();

    let order = read_order(args)?;
    let notifier = build_notifier(&config)?;
    let text = notifier.render_order(
        &order.venue,
        &order.intent,
        &order.result,
        args.at.unwrap_or_else(Utc::now),
    )?;

    output::notification(text.as_str());
    Ok(())
}

/// Compose the notification and deliver it to every configured sink.
pub async fn execute_send(args: &OrderArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    config.init_logging();

    let order = read_order(args)?;
    let notifier = build_notifier(&config)?;
    let text = notifier
        .notify_order_at(
            &order.venue,
            &order.intent,
            &order.result,
            args.at.unwrap_or_else(Utc::now),
        )
        .await
        .context("delivering notification")?;

    output::notification(text.as_str());
    output::success(&format!(
        "Delivered to {}",
        notifier.sinks().names().join(", ")
    ));
    Ok(())
}
