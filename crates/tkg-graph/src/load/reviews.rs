//! Review node upserts and the authorship/stay edges.
//!
//! Each review row ties exactly one traveller to one hotel, so it yields
//! the Review node plus three edges: WROTE, REVIEWED, and the directly
//! persisted STAYED_AT between the same traveller and hotel.

use anyhow::Result;
use neo4rs::Query;
use tracing::debug;

use tkg_core::dataset::ReviewRow;

use super::LoadResult;
use crate::GraphClient;

/// Upsert (:Review) nodes and the WROTE / REVIEWED / STAYED_AT edges.
pub async fn load_reviews(client: &GraphClient, rows: &[ReviewRow]) -> Result<LoadResult> {
    let mut result = LoadResult::default();

    for row in rows {
        // MERGE the Review node
        let query = Query::new(
            "MERGE (r:Review {review_id: $review_id})
             SET r.text = $text,
                 r.date = $date,
                 r.score_overall = $score_overall,
                 r.score_cleanliness = $score_cleanliness,
                 r.score_comfort = $score_comfort,
                 r.score_facilities = $score_facilities,
                 r.score_location = $score_location,
                 r.score_staff = $score_staff,
                 r.score_value_for_money = $score_value_for_money"
                .to_string(),
        )
        .param("review_id", row.review_id.as_str())
        .param("text", row.review_text.as_str())
        .param("date", row.review_date.as_str())
        .param("score_overall", row.score_overall)
        .param("score_cleanliness", row.score_cleanliness)
        .param("score_comfort", row.score_comfort)
        .param("score_facilities", row.score_facilities)
        .param("score_location", row.score_location)
        .param("score_staff", row.score_staff)
        .param("score_value_for_money", row.score_value_for_money);

        client.execute(query).await?;
        result.nodes_written += 1;

        // Traveller -[:WROTE]-> Review
        let wrote = Query::new(
            "MATCH (t:Traveller {user_id: $user_id}), (r:Review {review_id: $review_id})
             MERGE (t)-[:WROTE]->(r)"
                .to_string(),
        )
        .param("user_id", row.user_id.as_str())
        .param("review_id", row.review_id.as_str());

        client.execute(wrote).await?;
        result.relationships_written += 1;

        // Review -[:REVIEWED]-> Hotel
        let reviewed = Query::new(
            "MATCH (r:Review {review_id: $review_id}), (h:Hotel {hotel_id: $hotel_id})
             MERGE (r)-[:REVIEWED]->(h)"
                .to_string(),
        )
        .param("review_id", row.review_id.as_str())
        .param("hotel_id", row.hotel_id.as_str());

        client.execute(reviewed).await?;
        result.relationships_written += 1;

        // Traveller -[:STAYED_AT]-> Hotel, persisted directly even though it
        // is derivable from WROTE + REVIEWED
        let stayed = Query::new(
            "MATCH (t:Traveller {user_id: $user_id}), (h:Hotel {hotel_id: $hotel_id})
             MERGE (t)-[:STAYED_AT]->(h)"
                .to_string(),
        )
        .param("user_id", row.user_id.as_str())
        .param("hotel_id", row.hotel_id.as_str());

        client.execute(stayed).await?;
        result.relationships_written += 1;

        debug!(review_id = %row.review_id, hotel_id = %row.hotel_id, "Upserted review");
    }

    Ok(result)
}
