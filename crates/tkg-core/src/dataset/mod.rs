//! Tabular source loading.
//!
//! Reads the four CSV inputs into typed row collections. The csv crate maps
//! empty optional fields to `None`, which is how missing geography values
//! and unset visa flags are represented downstream.

pub mod model;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{TkgError, TkgResult};

pub use model::{HotelRow, ReviewRow, TravellerRow, VisaRow};

/// The four row collections consumed by the load pipeline.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub travellers: Vec<TravellerRow>,
    pub hotels: Vec<HotelRow>,
    pub reviews: Vec<ReviewRow>,
    pub visa: Vec<VisaRow>,
}

impl Dataset {
    /// Load `travellers.csv`, `hotels.csv`, `reviews.csv` and `visa.csv`
    /// from a directory.
    pub fn load_dir(dir: impl AsRef<Path>) -> TkgResult<Self> {
        let dir = dir.as_ref();
        let dataset = Self {
            travellers: read_csv_file(&dir.join("travellers.csv"))?,
            hotels: read_csv_file(&dir.join("hotels.csv"))?,
            reviews: read_csv_file(&dir.join("reviews.csv"))?,
            visa: read_csv_file(&dir.join("visa.csv"))?,
        };
        debug!(
            travellers = dataset.travellers.len(),
            hotels = dataset.hotels.len(),
            reviews = dataset.reviews.len(),
            visa = dataset.visa.len(),
            "Dataset loaded"
        );
        Ok(dataset)
    }
}

/// Read one CSV file into typed rows, tagging errors with the file name.
fn read_csv_file<T: DeserializeOwned>(path: &Path) -> TkgResult<Vec<T>> {
    let name = path.display().to_string();
    let file = File::open(path).map_err(|e| TkgError::dataset(&name, e.to_string()))?;
    read_csv(file).map_err(|e| TkgError::dataset(&name, e.to_string()))
}

/// Parse CSV rows from any reader. Exposed so tests can parse from
/// in-memory buffers.
pub fn read_csv<T: DeserializeOwned, R: Read>(reader: R) -> csv::Result<Vec<T>> {
    csv::Reader::from_reader(reader).deserialize().collect()
}

/// Interpret a tabular cell as a boolean flag.
///
/// "yes", "true", "1" and "y" (any case, surrounding whitespace ignored)
/// are true; everything else is false.
pub fn coerce_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "yes" | "true" | "1" | "y"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_bool_truthy() {
        for value in ["yes", "Yes", "YES", "true", "TRUE", "1", "y", "Y", " yes "] {
            assert!(coerce_bool(value), "expected '{}' to be true", value);
        }
    }

    #[test]
    fn test_coerce_bool_falsy() {
        for value in ["no", "No", "false", "0", "", "  ", "maybe", "n/a"] {
            assert!(!coerce_bool(value), "expected '{}' to be false", value);
        }
    }

    #[test]
    fn test_read_travellers() {
        let data = "\
user_id,user_gender,country,age_group,traveller_type,join_date
u1,F,Italy,25-34,solo,2021-03-01
u2,M,,35-44,business,2020-11-15
";
        let rows: Vec<TravellerRow> = read_csv(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].user_id, "u1");
        assert_eq!(rows[0].country.as_deref(), Some("Italy"));
        assert_eq!(rows[0].age_group, "25-34");
        // empty country cell comes back as None
        assert_eq!(rows[1].country, None);
    }

    #[test]
    fn test_read_hotels() {
        let data = "\
hotel_id,hotel_name,city,country,star_rating,lat,lon,cleanliness_base,comfort_base,facilities_base,location_base,staff_base,value_for_money_base
h1,Grand Plaza,Rome,Italy,4.5,41.9,12.5,8.1,7.9,8.4,9.0,8.2,7.5
";
        let rows: Vec<HotelRow> = read_csv(data.as_bytes()).unwrap();
        assert_eq!(rows[0].hotel_name, "Grand Plaza");
        assert_eq!(rows[0].star_rating, 4.5);
        assert_eq!(rows[0].cleanliness_base, 8.1);
    }

    #[test]
    fn test_read_hotels_malformed_number_fails() {
        let data = "\
hotel_id,hotel_name,city,country,star_rating,lat,lon,cleanliness_base,comfort_base,facilities_base,location_base,staff_base,value_for_money_base
h1,Grand Plaza,Rome,Italy,not-a-number,41.9,12.5,8.1,7.9,8.4,9.0,8.2,7.5
";
        assert!(read_csv::<HotelRow, _>(data.as_bytes()).is_err());
    }

    #[test]
    fn test_read_visa_renamed_columns() {
        let data = "\
from,to,requires_visa,visa_type
Italy,Japan,Yes,eVisa
Japan,Italy,No,
France,Japan,,
";
        let rows: Vec<VisaRow> = read_csv(data.as_bytes()).unwrap();
        assert_eq!(rows[0].from_country, "Italy");
        assert_eq!(rows[0].to_country, "Japan");
        assert!(rows[0].requires_visa());
        assert_eq!(rows[0].visa_type.as_deref(), Some("eVisa"));
        assert!(!rows[1].requires_visa());
        // missing flag counts as false
        assert!(!rows[2].requires_visa());
        assert_eq!(rows[2].visa_type, None);
    }

    #[test]
    fn test_read_reviews() {
        let data = "\
review_id,user_id,hotel_id,review_date,score_overall,score_cleanliness,score_comfort,score_facilities,score_location,score_staff,score_value_for_money,review_text
r1,u1,h1,2023-06-12,8.5,9.0,8.0,7.5,9.5,8.0,7.0,Lovely stay near the station
";
        let rows: Vec<ReviewRow> = read_csv(data.as_bytes()).unwrap();
        assert_eq!(rows[0].review_id, "r1");
        assert_eq!(rows[0].score_overall, 8.5);
        assert_eq!(rows[0].review_text, "Lovely stay near the station");
    }
}
