use super::property::Property;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A guest's reservation joined with the reserved property and its rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct GuestReservation {
    pub reservation_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub guest_id: i32,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: Property,
    pub average_rating: Option<f64>,
}

impl GuestReservation {
    /// Number of nights booked
    pub fn nights(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}
