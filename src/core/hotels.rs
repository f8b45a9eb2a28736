use crate::core::{catalog, destinations::DestinationCatalog};
use crate::models::{Hotel, HotelQuery, HotelSuggestion, Location};
use rand::seq::SliceRandom;
use rand::Rng;

/// Latitude above which coordinate searches get the better-rated hotels
pub const NORTHERN_LATITUDE_THRESHOLD: f64 = 30.0;

/// Minimum rating for the northern coordinate bucket
pub const NORTHERN_MIN_RATING: f32 = 4.0;

/// Radius for naming a coordinate after a nearby destination
pub const NEAREST_DESTINATION_RADIUS_KM: f64 = 50.0;

/// Smallest result of the random fallback
const MIN_FALLBACK_RESULTS: usize = 3;

/// How a curated place rule picks hotels
#[derive(Debug, Clone, PartialEq)]
pub enum HotelSelector {
    /// Rating strictly above the cutoff, plus any explicitly included ids
    RatingAbove { cutoff: f32, include_ids: Vec<String> },
    /// Rating at or below the cutoff
    RatingAtMost(f32),
    /// Everything except the listed ids
    Exclude(Vec<String>),
}

impl HotelSelector {
    #[inline]
    pub fn selects(&self, hotel: &Hotel) -> bool {
        match self {
            HotelSelector::RatingAbove { cutoff, include_ids } => {
                hotel.rating > *cutoff || include_ids.iter().any(|id| *id == hotel.id)
            }
            HotelSelector::RatingAtMost(cutoff) => hotel.rating <= *cutoff,
            HotelSelector::Exclude(ids) => !ids.iter().any(|id| *id == hotel.id),
        }
    }
}

/// Curated result set for place names containing any of `fragments`
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceRule {
    pub fragments: Vec<String>,
    pub selector: HotelSelector,
}

impl PlaceRule {
    pub fn new(fragments: &[&str], selector: HotelSelector) -> Self {
        Self {
            fragments: fragments.iter().map(|f| f.to_lowercase()).collect(),
            selector,
        }
    }

    /// Case-insensitive substring match
    pub fn matches(&self, place_name: &str) -> bool {
        let name = place_name.to_lowercase();
        self.fragments.iter().any(|fragment| name.contains(fragment.as_str()))
    }
}

/// Built-in place rules
pub fn default_place_rules() -> Vec<PlaceRule> {
    vec![
        PlaceRule::new(
            &["khirsu"],
            HotelSelector::RatingAbove {
                cutoff: 4.0,
                include_ids: vec!["hotel5".to_string()],
            },
        ),
        PlaceRule::new(&["rishikesh"], HotelSelector::Exclude(vec!["hotel4".to_string()])),
        PlaceRule::new(&["remote", "trek"], HotelSelector::RatingAtMost(4.0)),
    ]
}

/// Hotel search over a fixed catalog
///
/// Name queries are bucketed by [`PlaceRule`]s, coordinate queries by
/// latitude. Anything unmatched falls back to a random subset.
#[derive(Debug, Clone)]
pub struct HotelMatcher {
    hotels: Vec<Hotel>,
    place_rules: Vec<PlaceRule>,
    destinations: DestinationCatalog,
}

impl HotelMatcher {
    pub fn new(hotels: Vec<Hotel>, place_rules: Vec<PlaceRule>, destinations: DestinationCatalog) -> Self {
        Self {
            hotels,
            place_rules,
            destinations,
        }
    }

    pub fn with_default_catalog() -> Self {
        Self::new(
            catalog::hotels(),
            default_place_rules(),
            DestinationCatalog::with_default_catalog(),
        )
    }

    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    /// Hotels for a parsed query, with booking links for the searched place
    pub fn hotels_for<R: Rng + ?Sized>(&self, query: &HotelQuery, rng: &mut R) -> Vec<HotelSuggestion> {
        match query {
            HotelQuery::Name(name) => self.hotels_by_location_name(name, rng),
            HotelQuery::Coordinates(location) => self.hotels_near(location, rng),
        }
    }

    /// Hotels for a free-text place name
    pub fn hotels_by_location_name<R: Rng + ?Sized>(
        &self,
        location_name: &str,
        rng: &mut R,
    ) -> Vec<HotelSuggestion> {
        let label = location_name.trim();

        let selected = match self.place_rules.iter().find(|rule| rule.matches(label)) {
            Some(rule) => {
                tracing::debug!(location = label, fragments = ?rule.fragments, "Curated hotel rule matched");
                self.select(|hotel| rule.selector.selects(hotel), rng)
            }
            None => self.random_subset(rng),
        };

        suggestions(selected, label)
    }

    /// Hotels for a coordinate
    pub fn hotels_near<R: Rng + ?Sized>(&self, location: &Location, rng: &mut R) -> Vec<HotelSuggestion> {
        let selected = if location.is_valid() && location.lat > NORTHERN_LATITUDE_THRESHOLD {
            self.select(|hotel| hotel.rating >= NORTHERN_MIN_RATING, rng)
        } else {
            self.random_subset(rng)
        };

        let label = match self.destinations.nearest(location, NEAREST_DESTINATION_RADIUS_KM) {
            Some(destination) => destination.name.clone(),
            None => format!("{:.4},{:.4}", location.lat, location.lng),
        };

        suggestions(selected, &label)
    }

    fn select<R, F>(&self, predicate: F, rng: &mut R) -> Vec<Hotel>
    where
        R: Rng + ?Sized,
        F: Fn(&Hotel) -> bool,
    {
        let mut selected: Vec<Hotel> = self.hotels.iter().filter(|h| predicate(h)).cloned().collect();
        selected.shuffle(rng);
        selected
    }

    /// Shuffled catalog cut to a random length between three and all
    fn random_subset<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Hotel> {
        let mut selected = self.hotels.clone();
        selected.shuffle(rng);

        if selected.len() > MIN_FALLBACK_RESULTS {
            let count = rng.random_range(MIN_FALLBACK_RESULTS..=selected.len());
            selected.truncate(count);
        }

        selected
    }
}

impl Default for HotelMatcher {
    fn default() -> Self {
        Self::with_default_catalog()
    }
}

fn suggestions(hotels: Vec<Hotel>, location_label: &str) -> Vec<HotelSuggestion> {
    hotels
        .into_iter()
        .map(|hotel| HotelSuggestion {
            suggested_booking_site: hotel.booking_partner.map(|p| p.display_name().to_string()),
            booking_search_url: hotel.booking_partner.map(|p| p.search_url(location_label)),
            id: hotel.id,
            name: hotel.name,
            image_url: hotel.image_url,
            rating: hotel.rating,
        })
        .collect()
}
