//! Command dispatch.

use anyhow::Result;

use super::{check, order, output, CheckCommand, Cli, Commands};

/// Run the parsed command line.
pub async fn execute(cli: Cli) -> Result<()> {
    output::configure(output::OutputConfig::new(cli.json, cli.quiet));

    match cli.command {
        Commands::Render(args) => order::execute_render(&args),
        Commands::Send(args) => order::execute_send(&args).await,
        Commands::Check(CheckCommand::Config(arg)) => check::execute_config(&arg.config),
    }
}
