// Core search exports
pub mod booking;
pub mod catalog;
pub mod destinations;
pub mod distance;
pub mod hotels;
pub mod tiers;
pub mod vehicles;

pub use destinations::DestinationCatalog;
pub use distance::haversine_distance;
pub use hotels::{default_place_rules, HotelMatcher, HotelSelector, PlaceRule};
pub use tiers::{Tier, TierRule, TierTable};
pub use vehicles::{find_available_vehicles, VehicleMatcher};
