//! Estate CLI - command-line client for the real-estate management portal.

mod access;
mod cli;
mod commands;
mod config;
mod format;
mod portal;
mod query;
mod types;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Controlled by RUST_LOG; request logging lives at debug level.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();
    cli.command.execute().await
}
