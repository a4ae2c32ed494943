//! Command-line interface definitions.

pub mod check;
pub mod command;
pub mod order;
pub mod output;

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};

/// Tradenote - order-result notifications for trading bots.
#[derive(Parser, Debug)]
#[command(name = "tradenote")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Emit machine-readable JSON lines
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compose the notification for an order and print it
    Render(OrderArgs),

    /// Compose the notification for an order and deliver it to the sinks
    Send(OrderArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `tradenote check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Args, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments describing one executed order.
#[derive(Args, Debug)]
pub struct OrderArgs {
    /// JSON file holding the order intent
    #[arg(long)]
    pub intent: PathBuf,

    /// JSON file holding the venue's raw order result
    #[arg(long)]
    pub result: PathBuf,

    /// Venue identifier (defaults to the intent's `exchange`)
    #[arg(long)]
    pub venue: Option<String>,

    /// Path to configuration file (defaults apply when omitted)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Timestamp to render instead of now (RFC 3339)
    #[arg(long)]
    pub at: Option<DateTime<Utc>>,
}
