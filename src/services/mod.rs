//! Services module
//!
//! Business logic layered over the store: reverse geocoding and spot creation.

pub mod geocoding;
pub mod spots;

pub use geocoding::{NominatimGeocoder, Place, ReverseGeocoder};
pub use spots::{NewSpot, SpotService};
