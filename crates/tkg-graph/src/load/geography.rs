//! City and Country nodes plus the geography edges.
//!
//! Countries come from the union of the hotel and traveller country
//! columns, cities from the hotel rows. Rows with a missing city or
//! country are skipped when writing edges.

use std::collections::BTreeSet;

use anyhow::Result;
use neo4rs::Query;
use tracing::debug;

use tkg_core::dataset::{HotelRow, TravellerRow};

use super::LoadResult;
use crate::GraphClient;

/// Upsert City/Country nodes and the LOCATED_IN / FROM_COUNTRY edges.
pub async fn load_geography(
    client: &GraphClient,
    hotels: &[HotelRow],
    travellers: &[TravellerRow],
) -> Result<LoadResult> {
    let mut result = LoadResult::default();

    for name in distinct_countries(hotels, travellers) {
        let query = Query::new("MERGE (:Country {name: $name})".to_string())
            .param("name", name.as_str());
        client.execute(query).await?;
        result.nodes_written += 1;
    }

    for name in distinct_cities(hotels) {
        let query = Query::new("MERGE (:City {name: $name})".to_string())
            .param("name", name.as_str());
        client.execute(query).await?;
        result.nodes_written += 1;
    }

    // Hotel -[:LOCATED_IN]-> City
    for row in hotels {
        let Some(city) = row.city.as_deref() else { continue };
        let query = Query::new(
            "MATCH (h:Hotel {hotel_id: $hotel_id}), (c:City {name: $city})
             MERGE (h)-[:LOCATED_IN]->(c)"
                .to_string(),
        )
        .param("hotel_id", row.hotel_id.as_str())
        .param("city", city);

        client.execute(query).await?;
        result.relationships_written += 1;
    }

    // City -[:LOCATED_IN]-> Country
    for row in hotels {
        let (Some(city), Some(country)) = (row.city.as_deref(), row.country.as_deref()) else {
            continue;
        };
        let query = Query::new(
            "MATCH (c:City {name: $city}), (co:Country {name: $country})
             MERGE (c)-[:LOCATED_IN]->(co)"
                .to_string(),
        )
        .param("city", city)
        .param("country", country);

        client.execute(query).await?;
        result.relationships_written += 1;
    }

    // Traveller -[:FROM_COUNTRY]-> Country
    for row in travellers {
        let Some(country) = row.country.as_deref() else { continue };
        let query = Query::new(
            "MATCH (t:Traveller {user_id: $user_id}), (co:Country {name: $country})
             MERGE (t)-[:FROM_COUNTRY]->(co)"
                .to_string(),
        )
        .param("user_id", row.user_id.as_str())
        .param("country", country);

        client.execute(query).await?;
        result.relationships_written += 1;
    }

    debug!(
        nodes = result.nodes_written,
        rels = result.relationships_written,
        "Geography upserted"
    );

    Ok(result)
}

/// Distinct non-null country names across hotel and traveller rows.
pub fn distinct_countries(hotels: &[HotelRow], travellers: &[TravellerRow]) -> Vec<String> {
    let mut names: BTreeSet<&str> = BTreeSet::new();
    names.extend(hotels.iter().filter_map(|r| r.country.as_deref()));
    names.extend(travellers.iter().filter_map(|r| r.country.as_deref()));
    names.into_iter().map(String::from).collect()
}

/// Distinct non-null city names across hotel rows.
pub fn distinct_cities(hotels: &[HotelRow]) -> Vec<String> {
    let names: BTreeSet<&str> = hotels.iter().filter_map(|r| r.city.as_deref()).collect();
    names.into_iter().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotel(city: Option<&str>, country: Option<&str>) -> HotelRow {
        HotelRow {
            hotel_id: "h1".to_string(),
            hotel_name: "Hotel".to_string(),
            city: city.map(String::from),
            country: country.map(String::from),
            star_rating: 3.0,
            lat: 0.0,
            lon: 0.0,
            cleanliness_base: 7.0,
            comfort_base: 7.0,
            facilities_base: 7.0,
            location_base: 7.0,
            staff_base: 7.0,
            value_for_money_base: 7.0,
        }
    }

    fn traveller(country: Option<&str>) -> TravellerRow {
        TravellerRow {
            user_id: "u1".to_string(),
            user_gender: "F".to_string(),
            country: country.map(String::from),
            age_group: "25-34".to_string(),
            traveller_type: "solo".to_string(),
            join_date: "2021-01-01".to_string(),
        }
    }

    #[test]
    fn test_distinct_countries_union() {
        let hotels = vec![hotel(Some("Rome"), Some("Italy")), hotel(Some("Tokyo"), Some("Japan"))];
        let travellers = vec![traveller(Some("Italy")), traveller(Some("Brazil"))];
        assert_eq!(
            distinct_countries(&hotels, &travellers),
            vec!["Brazil", "Italy", "Japan"]
        );
    }

    #[test]
    fn test_distinct_countries_drops_missing() {
        let hotels = vec![hotel(Some("Rome"), None)];
        let travellers = vec![traveller(None), traveller(Some("Italy"))];
        assert_eq!(distinct_countries(&hotels, &travellers), vec!["Italy"]);
    }

    #[test]
    fn test_distinct_cities_dedups() {
        let hotels = vec![
            hotel(Some("Rome"), Some("Italy")),
            hotel(Some("Rome"), Some("Italy")),
            hotel(None, Some("Italy")),
            hotel(Some("Tokyo"), Some("Japan")),
        ];
        assert_eq!(distinct_cities(&hotels), vec!["Rome", "Tokyo"]);
    }
}
