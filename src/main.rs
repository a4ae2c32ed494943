use clap::Parser;
use tradenote::adapter::inbound::cli::{command, output, Cli};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(e) = command::execute(cli).await {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
