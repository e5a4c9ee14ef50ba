//! Scryer CLI binary.
//!
//! Looks cards and sets up on Scryfall and prints the results.

use clap::Parser;
use scryer::{ScryerClient, ScryerConfig};
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, run_command};

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let client = match &cli.config {
        Some(path) => ScryerClient::from_config(&ScryerConfig::from_file(path)?),
        None => ScryerClient::load()?,
    };

    let result = run_command(&client, cli.command, cli.format).await;
    client.close().await;
    result?;

    Ok(())
}
