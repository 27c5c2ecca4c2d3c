/// Spot entity module
pub mod spot;

pub use spot::Entity as Spot;
