//! Traveller node upserts.

use anyhow::Result;
use neo4rs::Query;
use tracing::debug;

use tkg_core::dataset::TravellerRow;

use super::LoadResult;
use crate::GraphClient;

/// Upsert one (:Traveller) node per row, keyed by user_id.
pub async fn load_travellers(client: &GraphClient, rows: &[TravellerRow]) -> Result<LoadResult> {
    let mut result = LoadResult::default();

    for row in rows {
        let query = Query::new(
            "MERGE (t:Traveller {user_id: $user_id})
             SET t.age_group = $age_group,
                 t.traveller_type = $traveller_type,
                 t.gender = $gender"
                .to_string(),
        )
        .param("user_id", row.user_id.as_str())
        .param("age_group", row.age_group.as_str())
        .param("traveller_type", row.traveller_type.as_str())
        .param("gender", row.user_gender.as_str());

        client.execute(query).await?;
        result.nodes_written += 1;

        debug!(user_id = %row.user_id, "Upserted traveller");
    }

    Ok(result)
}
