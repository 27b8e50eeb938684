//! Typed rows for the four tabular sources.
//!
//! One struct per file, fields named after the source columns. Parsing a
//! file fails as a whole if any row does not match these types.

use serde::Deserialize;

use super::coerce_bool;

/// One row of `travellers.csv`.
#[derive(Debug, Clone, Deserialize)]
pub struct TravellerRow {
    pub user_id: String,
    pub user_gender: String,
    pub country: Option<String>,
    pub age_group: String,
    pub traveller_type: String,
    pub join_date: String,
}

/// One row of `hotels.csv`.
#[derive(Debug, Clone, Deserialize)]
pub struct HotelRow {
    pub hotel_id: String,
    pub hotel_name: String,
    pub city: Option<String>,
    pub country: Option<String>,
    pub star_rating: f64,
    pub lat: f64,
    pub lon: f64,
    pub cleanliness_base: f64,
    pub comfort_base: f64,
    pub facilities_base: f64,
    pub location_base: f64,
    pub staff_base: f64,
    pub value_for_money_base: f64,
}

/// One row of `reviews.csv`. Each row ties one traveller to one hotel.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewRow {
    pub review_id: String,
    pub user_id: String,
    pub hotel_id: String,
    pub review_date: String,
    pub score_overall: f64,
    pub score_cleanliness: f64,
    pub score_comfort: f64,
    pub score_facilities: f64,
    pub score_location: f64,
    pub score_staff: f64,
    pub score_value_for_money: f64,
    pub review_text: String,
}

/// One row of `visa.csv`.
#[derive(Debug, Clone, Deserialize)]
pub struct VisaRow {
    #[serde(rename = "from")]
    pub from_country: String,
    #[serde(rename = "to")]
    pub to_country: String,
    pub requires_visa: Option<String>,
    pub visa_type: Option<String>,
}

impl VisaRow {
    /// Whether this row calls for a visa edge.
    pub fn requires_visa(&self) -> bool {
        self.requires_visa.as_deref().map(coerce_bool).unwrap_or(false)
    }
}
