//! Hotel node upserts.

use anyhow::Result;
use neo4rs::Query;
use tracing::debug;

use tkg_core::dataset::HotelRow;

use super::LoadResult;
use crate::GraphClient;

/// Upsert one (:Hotel) node per row, keyed by hotel_id.
///
/// Only the name, star rating and the cleanliness/comfort/facilities base
/// scores are persisted on the node; the remaining columns are parsed but
/// not stored. The average_reviews_score attribute is set later by the
/// aggregate step, never here.
pub async fn load_hotels(client: &GraphClient, rows: &[HotelRow]) -> Result<LoadResult> {
    let mut result = LoadResult::default();

    for row in rows {
        let query = Query::new(
            "MERGE (h:Hotel {hotel_id: $hotel_id})
             SET h.name = $name,
                 h.star_rating = $star_rating,
                 h.cleanliness_base = $cleanliness_base,
                 h.comfort_base = $comfort_base,
                 h.facilities_base = $facilities_base"
                .to_string(),
        )
        .param("hotel_id", row.hotel_id.as_str())
        .param("name", row.hotel_name.as_str())
        .param("star_rating", row.star_rating)
        .param("cleanliness_base", row.cleanliness_base)
        .param("comfort_base", row.comfort_base)
        .param("facilities_base", row.facilities_base);

        client.execute(query).await?;
        result.nodes_written += 1;

        debug!(hotel_id = %row.hotel_id, name = %row.hotel_name, "Upserted hotel");
    }

    Ok(result)
}
