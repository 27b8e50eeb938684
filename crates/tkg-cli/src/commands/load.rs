//! The one-shot batch load command.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use tkg_core::{Dataset, Settings};
use tkg_graph::{GraphClient, GraphConfig};

#[derive(Args)]
pub struct LoadArgs {
    /// Path to the KEY=VALUE connection config file
    #[arg(long, default_value = "config.txt")]
    pub config: PathBuf,

    /// Directory containing travellers.csv, hotels.csv, reviews.csv, visa.csv
    #[arg(long, default_value = ".")]
    pub data_dir: PathBuf,
}

/// Read config and datasets, then run the full upsert sequence.
pub async fn execute(args: LoadArgs) -> Result<()> {
    // Config and datasets are read before any connection is attempted, so
    // a missing key or malformed file never touches the database.
    let settings = Settings::from_file(&args.config)?;
    let dataset = Dataset::load_dir(&args.data_dir)?;

    println!("{}", "Loading travel knowledge graph...".bold());

    let client = GraphClient::connect(&GraphConfig::from(&settings)).await?;

    tkg_graph::schema::initialize_schema(&client).await?;
    let result = tkg_graph::run_full_load(&client, &dataset).await?;

    let counts = client.get_counts().await?;

    println!("\n{}", "Load complete:".green().bold());
    println!("  Nodes written:         {}", result.nodes_written);
    println!("  Relationships written: {}", result.relationships_written);
    println!("  Graph now holds {} nodes and {} relationships", counts.nodes, counts.relationships);

    Ok(())
}
