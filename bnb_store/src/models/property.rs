use crate::query_builder::InsertBuilder;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Minor currency units per user-facing unit
pub const MINOR_UNITS_PER_UNIT: i64 = 100;

/// Convert a user-facing decimal price to stored minor units (cents)
pub fn to_minor_units(price: f64) -> i64 {
    (price * MINOR_UNITS_PER_UNIT as f64).round() as i64
}

/// A row of the `properties` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Property {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    /// Nightly price in minor currency units
    pub cost_per_night: i32,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
}

impl Property {
    /// Nightly price in user-facing units
    pub fn price_per_night(&self) -> f64 {
        f64::from(self.cost_per_night) / MINOR_UNITS_PER_UNIT as f64
    }
}

/// One result of a property search: the property and its mean review rating
///
/// `average_rating` is `None` only when unreviewed properties are included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PropertyListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: Property,
    pub average_rating: Option<f64>,
}

/// Payload for inserting a property
///
/// Each field is written to the column of the same name, independent of the
/// order fields are declared or supplied in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProperty {
    pub owner_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    /// Nightly price in minor currency units
    pub cost_per_night: i32,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
}

impl NewProperty {
    pub(crate) fn insert(&self) -> InsertBuilder {
        InsertBuilder::new("properties")
            .value("title", self.title.as_str())
            .value("description", self.description.clone())
            .value("number_of_bedrooms", self.number_of_bedrooms)
            .value("number_of_bathrooms", self.number_of_bathrooms)
            .value("parking_spaces", self.parking_spaces)
            .value("cost_per_night", self.cost_per_night)
            .value("thumbnail_photo_url", self.thumbnail_photo_url.as_str())
            .value("cover_photo_url", self.cover_photo_url.as_str())
            .value("street", self.street.as_str())
            .value("country", self.country.as_str())
            .value("city", self.city.as_str())
            .value("province", self.province.as_str())
            .value("post_code", self.post_code.as_str())
            .value("owner_id", self.owner_id)
            .returning_all()
    }
}
