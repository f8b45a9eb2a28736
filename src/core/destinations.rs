use crate::core::{catalog, distance::haversine_distance};
use crate::models::{Destination, DestinationCategory, Location};

/// Browsable hidden-location listings
#[derive(Debug, Clone)]
pub struct DestinationCatalog {
    destinations: Vec<Destination>,
}

impl DestinationCatalog {
    pub fn new(destinations: Vec<Destination>) -> Self {
        Self { destinations }
    }

    pub fn with_default_catalog() -> Self {
        Self::new(catalog::destinations())
    }

    /// Listings in catalog order, optionally narrowed to one category
    pub fn list(&self, category: Option<DestinationCategory>) -> Vec<Destination> {
        self.destinations
            .iter()
            .filter(|d| category.map_or(true, |c| d.category == c))
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == id)
    }

    /// Closest destination within `radius_km` of a point
    pub fn nearest(&self, location: &Location, radius_km: f64) -> Option<&Destination> {
        self.destinations
            .iter()
            .map(|d| (d, haversine_distance(location, &d.coordinates)))
            .filter(|(_, distance)| *distance <= radius_km)
            .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(d, _)| d)
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}

impl Default for DestinationCatalog {
    fn default() -> Self {
        Self::with_default_catalog()
    }
}
