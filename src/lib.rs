//! # LightBnb
//!
//! Data-access layer for a vacation-rental site: users, property listings and
//! reservations stored in PostgreSQL.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lightbnb::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let bnb = LightBnb::new(DatabaseConfig::default()).await?;
//!     let store = bnb.store();
//!
//!     let filters = PropertyFilters::new()
//!         .city("Vancouver")
//!         .maximum_price_per_night(250.0)
//!         .minimum_rating(4.0);
//!
//!     for listing in store.get_all_properties(&filters, Some(5)).await? {
//!         println!(
//!             "{} - ${:.2}/night",
//!             listing.property.title,
//!             listing.property.price_per_night()
//!         );
//!     }
//!
//!     bnb.close().await;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod errors;
pub mod prelude;

// Re-export the main public types for convenience
pub use crate::core::LightBnb;
pub use errors::LightBnbError;

// Re-export centralized config
pub use config::{AppConfig, ConfigError, DatabaseConfig};

// Re-export internal crates
pub use bnb_store;

// Re-export external dependencies used in public API
pub use async_trait;
pub use sqlx;
