//! Core data models for the spot directory

pub mod country;
pub mod spot;

pub use country::is_valid_country_code;
pub use spot::{Coordinates, Spot, SpotEntry, SpotUpdate};
