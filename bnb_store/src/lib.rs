//! Bnb Store - data-access layer for LightBnB
//!
//! Users, property listings and reservations, read from and written to
//! PostgreSQL through parameterized statements built by `query_builder`.

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod errors;
pub mod models;
pub mod pg_store;
pub mod prelude;
pub mod queries;
pub mod query_builder;
pub mod traits;

pub use errors::StoreError;
pub use models::{GuestReservation, NewProperty, NewUser, Property, PropertyListing, User};
pub use pg_store::PgStore;
pub use queries::properties::PropertyFilters;
pub use queries::{ReviewJoin, DEFAULT_LIMIT};
pub use query_builder::{BuiltQuery, SelectBuilder, SqlValue};
pub use traits::*;

use sqlx::PgPool;

pub type DbPool = PgPool;
