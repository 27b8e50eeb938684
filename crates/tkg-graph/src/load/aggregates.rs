//! Derived hotel aggregates.

use anyhow::Result;
use neo4rs::Query;

use crate::GraphClient;

/// Recompute average_reviews_score for every hotel with attached reviews.
///
/// The MATCH pattern only binds hotels with at least one incoming REVIEWED
/// edge, so hotels without reviews never receive the attribute. Must run
/// after review ingestion; re-running recomputes from scratch.
pub async fn set_average_review_scores(client: &GraphClient) -> Result<()> {
    let query = Query::new(
        "MATCH (h:Hotel)<-[:REVIEWED]-(r:Review)
         WITH h, avg(r.score_overall) AS avg_score
         SET h.average_reviews_score = avg_score"
            .to_string(),
    );

    client.execute(query).await
}
