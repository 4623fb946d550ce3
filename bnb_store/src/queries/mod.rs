//! Statements issued by the stores
//!
//! Each function here builds a fresh `BuiltQuery` from its own inputs; nothing
//! is shared between calls.

pub mod properties;
pub mod reservations;
pub mod users;

use crate::query_builder::JoinType;
use serde::{Deserialize, Serialize};

/// Row cap applied when the caller does not pass one
pub const DEFAULT_LIMIT: u32 = 10;

/// Mean review rating expression shared by SELECT and HAVING
pub const AVERAGE_RATING: &str = "avg(rating)";

/// How listing queries join `property_reviews`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewJoin {
    /// Inner join: properties without reviews are left out
    #[default]
    ReviewedOnly,
    /// Left join: unreviewed properties appear with no average rating
    IncludeUnreviewed,
}

impl ReviewJoin {
    pub fn join_type(&self) -> JoinType {
        match self {
            ReviewJoin::ReviewedOnly => JoinType::Inner,
            ReviewJoin::IncludeUnreviewed => JoinType::Left,
        }
    }
}
