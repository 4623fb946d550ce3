//! Convenience re-exports for common bnb-store usage

// Store traits
pub use crate::traits::{PropertyStore, ReservationStore, UserStore};

// Error types
pub use crate::errors::StoreError;

// PostgreSQL implementation
pub use crate::pg_store::PgStore;

// Rows and payloads
pub use crate::models::{GuestReservation, NewProperty, NewUser, Property, PropertyListing, User};

// Search criteria
pub use crate::queries::properties::PropertyFilters;
pub use crate::queries::{ReviewJoin, DEFAULT_LIMIT};

// Common external dependencies that are frequently used
pub use async_trait::async_trait;
pub use sqlx::PgPool;
