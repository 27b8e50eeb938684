//! TKG CLI - Travel Knowledge Graph loader
//!
//! Batch-loads traveller, hotel, review and visa datasets into Neo4j.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::Cli;

/// Initialize tracing from RUST_LOG, defaulting to info for our crates.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "tkg=debug,tkg_core=debug,tkg_graph=debug"
    } else {
        "tkg=info,tkg_core=info,tkg_graph=info"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.execute().await
}
