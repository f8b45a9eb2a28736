use crate::core::{catalog, tiers::TierTable};
use crate::models::{Vehicle, VehicleSearchCriteria};
use rand::seq::SliceRandom;
use rand::Rng;

/// Shortest rental the simulation accepts
pub const MIN_RENTAL_HOURS: i64 = 24;

/// Smallest result when no traveler count narrows the fleet
const MIN_UNFILTERED_RESULTS: usize = 2;

/// Rental search over a fixed fleet
///
/// # Pipeline Stages
/// 1. Rental length check (under a day yields nothing)
/// 2. Capacity filter
/// 3. Tier allow-list
/// 4. Shuffle and optional cap
#[derive(Debug, Clone)]
pub struct VehicleMatcher {
    fleet: Vec<Vehicle>,
    tiers: TierTable,
    max_results: Option<usize>,
}

impl VehicleMatcher {
    pub fn new(fleet: Vec<Vehicle>, tiers: TierTable) -> Self {
        Self {
            fleet,
            tiers,
            max_results: None,
        }
    }

    /// Matcher over the built-in fleet and tier table
    pub fn with_default_catalog() -> Self {
        Self::new(catalog::vehicles(), TierTable::default())
    }

    /// Cap the number of vehicles returned per search
    pub fn with_max_results(mut self, max_results: Option<usize>) -> Self {
        self.max_results = max_results.filter(|&max| max > 0);
        self
    }

    pub fn fleet(&self) -> &[Vehicle] {
        &self.fleet
    }

    pub fn tiers(&self) -> &TierTable {
        &self.tiers
    }

    /// Vehicles available for the given trip, in random order
    ///
    /// With a traveler count the eligible set is deterministic and only the
    /// order varies. Without one, a random-sized slice of the whole fleet
    /// is returned.
    pub fn find_available_vehicles<R: Rng + ?Sized>(
        &self,
        criteria: &VehicleSearchCriteria,
        rng: &mut R,
    ) -> Vec<Vehicle> {
        let mut matches = find_available_vehicles(criteria, &self.fleet, &self.tiers, rng);

        if let Some(max) = self.max_results {
            matches.truncate(max);
        }

        matches
    }
}

impl Default for VehicleMatcher {
    fn default() -> Self {
        Self::with_default_catalog()
    }
}

/// Filter `fleet` for a trip and shuffle the result
pub fn find_available_vehicles<R: Rng + ?Sized>(
    criteria: &VehicleSearchCriteria,
    fleet: &[Vehicle],
    tiers: &TierTable,
    rng: &mut R,
) -> Vec<Vehicle> {
    if criteria.rental_duration() < chrono::Duration::hours(MIN_RENTAL_HOURS) {
        tracing::debug!(
            pickup = %criteria.pickup_date,
            dropoff = %criteria.dropoff_date,
            "Rental shorter than a day, no vehicles offered"
        );
        return Vec::new();
    }

    let mut matches: Vec<Vehicle> = match criteria.travelers() {
        Some(travelers) => {
            let Some(rule) = tiers.rule_for(travelers) else {
                tracing::debug!(travelers, "No tier covers traveler count");
                return Vec::new();
            };

            fleet
                .iter()
                .filter(|vehicle| vehicle.seats(travelers))
                .filter(|vehicle| rule.allows(&vehicle.id))
                .cloned()
                .collect()
        }
        None => fleet.to_vec(),
    };

    matches.shuffle(rng);

    if criteria.travelers().is_none() && matches.len() > MIN_UNFILTERED_RESULTS {
        let count = rng.random_range(MIN_UNFILTERED_RESULTS..=matches.len());
        matches.truncate(count);
    }

    tracing::debug!(
        pickup_location = %criteria.pickup_location,
        dropoff_location = %criteria.dropoff_location,
        travelers = ?criteria.travelers(),
        found = matches.len(),
        "Vehicle search complete"
    );

    matches
}
