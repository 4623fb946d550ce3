//! PostgreSQL store implementations

pub mod core;
pub mod properties;
pub mod reservations;
pub mod users;

pub use self::core::PgStore;
