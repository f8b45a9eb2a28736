// Unit tests for Travillo

use chrono::{Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

use travillo::core::{HotelMatcher, Tier, TierTable, VehicleMatcher};
use travillo::models::{HotelQuery, Location, VehicleSearchCriteria};

fn criteria(days: i64, travelers: Option<u32>) -> VehicleSearchCriteria {
    let pickup = Utc.with_ymd_and_hms(2025, 10, 2, 8, 30, 0).unwrap();
    VehicleSearchCriteria {
        pickup_location: "Dehradun".to_string(),
        dropoff_location: "Rishikesh".to_string(),
        pickup_date: pickup,
        dropoff_date: pickup + Duration::days(days),
        number_of_travelers: travelers,
    }
}

fn allowed_for(tier: Tier) -> HashSet<String> {
    TierTable::default()
        .rules()
        .iter()
        .find(|rule| rule.tier == tier)
        .map(|rule| rule.allowed_vehicle_ids.iter().cloned().collect())
        .unwrap()
}

fn check_tier(travelers: std::ops::RangeInclusive<u32>, tier: Tier) {
    let matcher = VehicleMatcher::with_default_catalog();
    let allowed = allowed_for(tier);

    for n in travelers {
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            for vehicle in matcher.find_available_vehicles(&criteria(2, Some(n)), &mut rng) {
                assert!(allowed.contains(&vehicle.id), "{} not in {:?} tier for {}", vehicle.model, tier, n);
                assert!(vehicle.max_capacity.unwrap() >= n);
            }
        }
    }
}

#[test]
fn test_small_tier_for_one_to_five() {
    check_tier(1..=5, Tier::Small);
}

#[test]
fn test_mid_tier_for_six_to_nine() {
    check_tier(6..=9, Tier::Mid);
}

#[test]
fn test_large_tier_above_nine() {
    check_tier(10..=15, Tier::Large);

    let matcher = VehicleMatcher::with_default_catalog();
    let mut rng = StdRng::seed_from_u64(0);
    let result = matcher.find_available_vehicles(&criteria(4, Some(12)), &mut rng);
    let models: Vec<_> = result.iter().map(|v| v.model.as_str()).collect();
    assert_eq!(models, vec!["Tempo Traveller"]);
}

#[test]
fn test_short_rental_always_empty() {
    let matcher = VehicleMatcher::with_default_catalog();
    let pickup = Utc.with_ymd_and_hms(2025, 10, 2, 8, 30, 0).unwrap();

    for travelers in [None, Some(1), Some(7), Some(11)] {
        let mut rng = StdRng::seed_from_u64(42);
        let mut c = criteria(0, travelers);
        c.dropoff_date = pickup + Duration::hours(23) + Duration::minutes(59);
        assert!(matcher.find_available_vehicles(&c, &mut rng).is_empty());
    }
}

#[test]
fn test_exactly_one_day_is_accepted() {
    let matcher = VehicleMatcher::with_default_catalog();
    let mut rng = StdRng::seed_from_u64(42);

    assert!(!matcher.find_available_vehicles(&criteria(1, Some(2)), &mut rng).is_empty());
}

#[test]
fn test_repeated_search_same_membership() {
    let matcher = VehicleMatcher::with_default_catalog();
    let search = criteria(3, Some(4));

    let mut first_rng = StdRng::seed_from_u64(1);
    let mut second_rng = StdRng::seed_from_u64(2);
    let first: HashSet<_> = matcher
        .find_available_vehicles(&search, &mut first_rng)
        .into_iter()
        .map(|v| v.id)
        .collect();
    let second: HashSet<_> = matcher
        .find_available_vehicles(&search, &mut second_rng)
        .into_iter()
        .map(|v| v.id)
        .collect();

    assert_eq!(first, second);
    assert_eq!(first, HashSet::from(["1".to_string(), "5".to_string()]));
}

#[test]
fn test_hotel_curated_membership_is_stable() {
    let matcher = HotelMatcher::with_default_catalog();
    let query = HotelQuery::parse("Khirsu");

    let expected: HashSet<String> = ["hotel1", "hotel3", "hotel4", "hotel5"]
        .iter()
        .map(|id| id.to_string())
        .collect();

    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let ids: HashSet<String> = matcher
            .hotels_for(&query, &mut rng)
            .into_iter()
            .map(|h| h.id)
            .collect();
        assert_eq!(ids, expected);
    }
}

#[test]
fn test_hotel_query_dispatch() {
    let matcher = HotelMatcher::with_default_catalog();
    let mut rng = StdRng::seed_from_u64(3);

    let by_coordinates = matcher.hotels_for(&HotelQuery::parse("30.4851, 79.3331"), &mut rng);
    let direct = matcher.hotels_near(&Location::new(30.4851, 79.3331), &mut rng);

    let a: HashSet<_> = by_coordinates.iter().map(|h| h.id.clone()).collect();
    let b: HashSet<_> = direct.iter().map(|h| h.id.clone()).collect();
    assert_eq!(a, b);
    assert!(by_coordinates.iter().all(|h| h.rating >= 4.0));
}
