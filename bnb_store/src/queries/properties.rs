//! Property search
//!
//! Turns optional listing criteria into one statement: properties joined with
//! their mean review rating, row predicates in a fixed order, grouping on the
//! property id, an optional HAVING on the aggregate, cheapest first, capped.

use super::{ReviewJoin, AVERAGE_RATING};
use crate::models::property::to_minor_units;
use crate::query_builder::{
    BuiltQuery, GroupBy, JoinClause, Predicate, SelectBuilder, SelectField, SortOrder,
};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Optional listing criteria, as submitted by the search form
///
/// Numeric fields accept numbers or numeric text; blank text counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyFilters {
    /// Case-insensitive substring of the city
    pub city: Option<String>,
    #[serde(deserialize_with = "form_number")]
    pub owner_id: Option<i32>,
    /// Exclusive lower bound, user-facing units
    #[serde(deserialize_with = "form_number")]
    pub minimum_price_per_night: Option<f64>,
    /// Exclusive upper bound, user-facing units
    #[serde(deserialize_with = "form_number")]
    pub maximum_price_per_night: Option<f64>,
    /// Inclusive lower bound on the mean rating
    #[serde(deserialize_with = "form_number")]
    pub minimum_rating: Option<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FormField<T> {
    Number(T),
    Text(String),
}

fn form_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    match Option::<FormField<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(FormField::Number(value)) => Ok(Some(value)),
        Some(FormField::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse()
                .map(Some)
                .map_err(|e| de::Error::custom(format!("invalid number `{}`: {}", text, e)))
        }
    }
}

impl PropertyFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn owner_id(mut self, owner_id: i32) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn minimum_price_per_night(mut self, price: f64) -> Self {
        self.minimum_price_per_night = Some(price);
        self
    }

    pub fn maximum_price_per_night(mut self, price: f64) -> Self {
        self.maximum_price_per_night = Some(price);
        self
    }

    pub fn minimum_rating(mut self, rating: f64) -> Self {
        self.minimum_rating = Some(rating);
        self
    }

    /// City criterion, ignoring blank form input
    fn city_needle(&self) -> Option<&str> {
        self.city
            .as_deref()
            .map(str::trim)
            .filter(|city| !city.is_empty())
    }

    /// Row-level predicates, always in city, owner, min price, max price order
    pub fn row_predicates(&self) -> Vec<Predicate> {
        let mut predicates = Vec::with_capacity(4);

        if let Some(city) = self.city_needle() {
            predicates.push(Predicate::contains_ignore_case("city", city));
        }
        if let Some(owner_id) = self.owner_id {
            predicates.push(Predicate::eq("owner_id", owner_id));
        }
        if let Some(price) = self.minimum_price_per_night {
            predicates.push(Predicate::gt("cost_per_night", to_minor_units(price)));
        }
        if let Some(price) = self.maximum_price_per_night {
            predicates.push(Predicate::lt("cost_per_night", to_minor_units(price)));
        }

        predicates
    }

    /// Condition on the aggregated rating, if requested
    pub fn rating_predicate(&self) -> Option<Predicate> {
        self.minimum_rating
            .map(|rating| Predicate::gte(AVERAGE_RATING, rating))
    }

    /// Number of criteria that will bind a parameter
    pub fn present_count(&self) -> usize {
        self.row_predicates().len() + usize::from(self.minimum_rating.is_some())
    }
}

/// Build the listing statement for `filters`, capped at `limit` rows
pub fn property_search(
    filters: &PropertyFilters,
    limit: u32,
    review_join: ReviewJoin,
) -> BuiltQuery {
    let mut builder = SelectBuilder::new("properties")
        .select(SelectField::all_from("properties"))
        .select(SelectField::average("rating", "average_rating"))
        .join(JoinClause::new_on(
            review_join.join_type(),
            "property_reviews",
            "properties.id",
            "property_reviews.property_id",
        ));

    for predicate in filters.row_predicates() {
        builder = builder.filter(predicate);
    }

    let mut group_by = GroupBy::single("properties.id");
    if let Some(rating) = filters.rating_predicate() {
        group_by = group_by.having(rating);
    }

    builder
        .group_by(group_by)
        .order_by("cost_per_night", SortOrder::Asc)
        .limit(limit)
        .build()
}
