//! Row types for the `users`, `properties`, `reservations` and
//! `property_reviews` tables

pub mod property;
pub mod reservation;
pub mod user;

pub use property::{to_minor_units, NewProperty, Property, PropertyListing};
pub use reservation::GuestReservation;
pub use user::{NewUser, User};
