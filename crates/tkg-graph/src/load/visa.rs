//! NEEDS_VISA edges between countries.

use anyhow::Result;
use neo4rs::Query;
use tracing::debug;

use tkg_core::dataset::VisaRow;

use super::LoadResult;
use crate::GraphClient;

/// Create one directed NEEDS_VISA edge per truthy visa row.
///
/// Falsy rows create nothing, and edges written by earlier runs are left
/// in place.
pub async fn load_visa_edges(client: &GraphClient, rows: &[VisaRow]) -> Result<LoadResult> {
    let mut result = LoadResult::default();

    for (from, to, visa_type) in required_edges(rows) {
        let query = Query::new(
            "MATCH (a:Country {name: $from}), (b:Country {name: $to})
             MERGE (a)-[v:NEEDS_VISA]->(b)
             SET v.visa_type = $visa_type"
                .to_string(),
        )
        .param("from", from)
        .param("to", to)
        .param("visa_type", visa_type);

        client.execute(query).await?;
        result.relationships_written += 1;

        debug!(from = %from, to = %to, visa_type = %visa_type, "Upserted visa edge");
    }

    Ok(result)
}

/// The (from, to, visa_type) triples whose requirement flag coerces true.
pub fn required_edges(rows: &[VisaRow]) -> Vec<(&str, &str, &str)> {
    rows.iter()
        .filter(|row| row.requires_visa())
        .map(|row| {
            (
                row.from_country.as_str(),
                row.to_country.as_str(),
                row.visa_type.as_deref().unwrap_or(""),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(from: &str, to: &str, flag: Option<&str>, visa_type: Option<&str>) -> VisaRow {
        VisaRow {
            from_country: from.to_string(),
            to_country: to.to_string(),
            requires_visa: flag.map(String::from),
            visa_type: visa_type.map(String::from),
        }
    }

    #[test]
    fn test_only_truthy_rows_yield_edges() {
        let rows = vec![
            row("Italy", "Japan", Some("Yes"), Some("eVisa")),
            row("Japan", "Italy", Some("No"), None),
            row("Brazil", "Japan", None, None),
            row("France", "Japan", Some("TRUE"), Some("on-arrival")),
        ];
        assert_eq!(
            required_edges(&rows),
            vec![("Italy", "Japan", "eVisa"), ("France", "Japan", "on-arrival")]
        );
    }

    #[test]
    fn test_missing_visa_type_defaults_to_empty() {
        let rows = vec![row("Italy", "Japan", Some("1"), None)];
        assert_eq!(required_edges(&rows), vec![("Italy", "Japan", "")]);
    }
}
