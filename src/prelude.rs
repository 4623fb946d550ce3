//! Convenience re-exports for common LightBnb usage
//!
//! # Example
//!
//! ```rust
//! use lightbnb::prelude::*;
//!
//! let filters = PropertyFilters::new().city("Vancouver").minimum_rating(4.0);
//! assert_eq!(filters.present_count(), 2);
//! ```

// Core components
pub use crate::core::LightBnb;
pub use crate::errors::LightBnbError;

// Centralized config
pub use config::{AppConfig, DatabaseConfig};

// Stores, rows and search criteria
pub use bnb_store::prelude::*;

// Common external dependencies
pub use sqlx;
pub use tokio;
