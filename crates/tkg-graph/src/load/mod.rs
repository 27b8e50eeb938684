//! Tabular rows to Neo4j load pipeline.
//!
//! Runs the upsert steps in a fixed order so that every edge-creating step
//! executes after both of its endpoint-creating steps. Every query uses
//! MERGE, so the whole sequence can be re-run against the same or an
//! updated dataset without duplicating nodes or edges.

pub mod aggregates;
pub mod geography;
pub mod hotels;
pub mod reviews;
pub mod travellers;
pub mod visa;

use anyhow::{Context, Result};
use tracing::info;

use tkg_core::Dataset;

use crate::GraphClient;

/// Result of a load step.
#[derive(Debug, Clone, Default)]
pub struct LoadResult {
    pub nodes_written: usize,
    pub relationships_written: usize,
}

impl LoadResult {
    fn merge(&mut self, other: &LoadResult) {
        self.nodes_written += other.nodes_written;
        self.relationships_written += other.relationships_written;
    }
}

/// Run the full load sequence against a dataset.
///
/// Order is load-bearing: travellers and hotels before geography (their
/// edges need both endpoints), reviews after travellers and hotels, the
/// aggregate after reviews, visa edges after countries exist. A failed
/// query aborts the remaining steps.
pub async fn run_full_load(client: &GraphClient, dataset: &Dataset) -> Result<LoadResult> {
    info!("Starting full graph load");

    let mut total = LoadResult::default();

    let result = travellers::load_travellers(client, &dataset.travellers).await
        .context("Failed to load travellers")?;
    info!(nodes = result.nodes_written, "Travellers loaded");
    total.merge(&result);

    let result = hotels::load_hotels(client, &dataset.hotels).await
        .context("Failed to load hotels")?;
    info!(nodes = result.nodes_written, "Hotels loaded");
    total.merge(&result);

    let result = geography::load_geography(client, &dataset.hotels, &dataset.travellers).await
        .context("Failed to load cities and countries")?;
    info!(nodes = result.nodes_written, rels = result.relationships_written, "Geography loaded");
    total.merge(&result);

    let result = reviews::load_reviews(client, &dataset.reviews).await
        .context("Failed to load reviews")?;
    info!(nodes = result.nodes_written, rels = result.relationships_written, "Reviews loaded");
    total.merge(&result);

    aggregates::set_average_review_scores(client).await
        .context("Failed to compute hotel review averages")?;
    info!("Hotel review averages computed");

    let result = visa::load_visa_edges(client, &dataset.visa).await
        .context("Failed to load visa requirements")?;
    info!(rels = result.relationships_written, "Visa requirements loaded");
    total.merge(&result);

    info!(
        nodes = total.nodes_written,
        relationships = total.relationships_written,
        "Full load complete"
    );

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_result_merge() {
        let mut total = LoadResult::default();
        total.merge(&LoadResult { nodes_written: 3, relationships_written: 1 });
        total.merge(&LoadResult { nodes_written: 2, relationships_written: 4 });
        assert_eq!(total.nodes_written, 5);
        assert_eq!(total.relationships_written, 5);
    }
}
