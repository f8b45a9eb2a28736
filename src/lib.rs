//! Travillo - search and match service for the Travillo travel site
//!
//! This library provides the simulated rental and hotel searches behind the
//! Travillo pages, the destination listings, and feedback intake, plus the
//! actix-web routes exposing them.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{DestinationCatalog, HotelMatcher, TierTable, VehicleMatcher};
pub use models::{Destination, Hotel, HotelQuery, HotelSuggestion, Location, Vehicle, VehicleSearchCriteria};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let matcher = VehicleMatcher::default();
        assert_eq!(matcher.fleet().len(), 6);
        assert_eq!(HotelMatcher::default().hotels().len(), 6);
    }
}
