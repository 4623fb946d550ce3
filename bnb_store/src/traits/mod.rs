//! Trait definitions
//!
//! The store traits are the boundary the web layer depends on. `PgStore`
//! implements them against PostgreSQL; tests can substitute their own.

pub mod properties;
pub mod reservations;
pub mod users;

pub use properties::PropertyStore;
pub use reservations::ReservationStore;
pub use users::UserStore;
