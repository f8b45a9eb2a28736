use serde::{Deserialize, Serialize};

/// Vehicle available for rent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub model: String,
    #[serde(rename = "dailyRate")]
    pub daily_rate: u32,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(rename = "maxCapacity", default)]
    pub max_capacity: Option<u32>,
}

impl Vehicle {
    /// Whether the vehicle seats at least `travelers` people.
    /// Vehicles without a known capacity never qualify.
    pub fn seats(&self, travelers: u32) -> bool {
        self.max_capacity.is_some_and(|capacity| capacity >= travelers)
    }
}

/// Criteria for a rental search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleSearchCriteria {
    #[serde(rename = "pickupLocation")]
    pub pickup_location: String,
    #[serde(rename = "dropoffLocation")]
    pub dropoff_location: String,
    #[serde(rename = "pickupDate")]
    pub pickup_date: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "dropoffDate")]
    pub dropoff_date: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "numberOfTravelers", default)]
    pub number_of_travelers: Option<u32>,
}

impl VehicleSearchCriteria {
    /// Traveler count, treating zero as "not given"
    pub fn travelers(&self) -> Option<u32> {
        self.number_of_travelers.filter(|&n| n > 0)
    }

    /// Rental length; negative when dropoff precedes pickup
    pub fn rental_duration(&self) -> chrono::Duration {
        self.dropoff_date - self.pickup_date
    }
}

/// Geographic point used for coarse hotel bucketing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

/// External site a hotel suggestion links to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingPartner {
    BookingCom,
    Agoda,
    MakeMyTrip,
    Goibibo,
    Airbnb,
    Hostelworld,
}

/// Hotel catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: String,
    pub name: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub rating: f32,
    #[serde(rename = "bookingPartner", default)]
    pub booking_partner: Option<BookingPartner>,
}

/// Hotel returned from a search, with a booking link for the searched location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelSuggestion {
    pub id: String,
    pub name: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub rating: f32,
    #[serde(rename = "suggestedBookingSite")]
    pub suggested_booking_site: Option<String>,
    #[serde(rename = "bookingSearchUrl")]
    pub booking_search_url: Option<String>,
}

/// What a hotel search is anchored on
#[derive(Debug, Clone, PartialEq)]
pub enum HotelQuery {
    Name(String),
    Coordinates(Location),
}

impl HotelQuery {
    /// Parse free text, recognising a `"<lat>, <lng>"` pair anywhere in it
    /// (e.g. `"Khirsu (30.19, 78.87)"`) as coordinates. Anything else, and
    /// pairs outside the valid lat/lng range, is kept as a place name.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();

        let found = trimmed
            .match_indices(',')
            .find_map(|(comma, _)| coordinate_pair_at(trimmed, comma));

        match found {
            Some(location) => HotelQuery::Coordinates(location),
            None => HotelQuery::Name(trimmed.to_string()),
        }
    }
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Read the signed numbers directly left and right of the comma at `comma`
fn coordinate_pair_at(text: &str, comma: usize) -> Option<Location> {
    let left = text[..comma].trim_end();
    let digits_start = left
        .char_indices()
        .rev()
        .take_while(|(_, c)| is_number_char(*c))
        .last()
        .map(|(i, _)| i)?;
    let lat_start = match left[..digits_start].chars().last() {
        Some('-') | Some('+') => digits_start - 1,
        _ => digits_start,
    };

    let right = text[comma + 1..].trim_start();
    let sign_len = usize::from(right.starts_with(['-', '+']));
    let digits_len = right[sign_len..]
        .find(|c: char| !is_number_char(c))
        .unwrap_or(right.len() - sign_len);
    if digits_len == 0 {
        return None;
    }

    let lat = left[lat_start..].parse::<f64>().ok()?;
    let lng = right[..sign_len + digits_len].parse::<f64>().ok()?;
    let location = Location::new(lat, lng);
    location.is_valid().then_some(location)
}

/// Category of a destination listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationCategory {
    Village,
    Trek,
    Nature,
    Spiritual,
    Viewpoint,
    Cantonment,
    TempleTown,
    HillStation,
    Lake,
}

impl std::str::FromStr for DestinationCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "village" => Ok(Self::Village),
            "trek" => Ok(Self::Trek),
            "nature" => Ok(Self::Nature),
            "spiritual" => Ok(Self::Spiritual),
            "viewpoint" => Ok(Self::Viewpoint),
            "cantonment" => Ok(Self::Cantonment),
            "temple_town" => Ok(Self::TempleTown),
            "hill_station" => Ok(Self::HillStation),
            "lake" => Ok(Self::Lake),
            other => Err(format!("unknown destination category: {}", other)),
        }
    }
}

/// Browsable hidden-location listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub category: DestinationCategory,
    pub coordinates: Location,
}

/// Visitor feedback after defaults have been applied
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackSubmission {
    pub name: String,
    pub email: String,
    pub feedback: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinates() {
        assert_eq!(
            HotelQuery::parse("29.38, 79.45"),
            HotelQuery::Coordinates(Location::new(29.38, 79.45))
        );
        assert_eq!(
            HotelQuery::parse(" -12.5,+130 "),
            HotelQuery::Coordinates(Location::new(-12.5, 130.0))
        );
    }

    #[test]
    fn test_parse_embedded_coordinates() {
        assert_eq!(
            HotelQuery::parse("Khirsu (30.19, 78.87)"),
            HotelQuery::Coordinates(Location::new(30.19, 78.87))
        );
        assert_eq!(
            HotelQuery::parse("near -8.34,115.09 please"),
            HotelQuery::Coordinates(Location::new(-8.34, 115.09))
        );
        // A later valid pair is still found after an unusable comma
        assert_eq!(
            HotelQuery::parse("Pauri, Uttarakhand 30.15,78.78"),
            HotelQuery::Coordinates(Location::new(30.15, 78.78))
        );
    }

    #[test]
    fn test_parse_place_name() {
        assert_eq!(
            HotelQuery::parse("  Khirsu Village "),
            HotelQuery::Name("Khirsu Village".to_string())
        );
        // Out of range coordinates are not a location
        assert_eq!(
            HotelQuery::parse("120, 10"),
            HotelQuery::Name("120, 10".to_string())
        );
        assert_eq!(
            HotelQuery::parse("Rishikesh, Uttarakhand"),
            HotelQuery::Name("Rishikesh, Uttarakhand".to_string())
        );
    }

    #[test]
    fn test_zero_travelers_treated_as_absent() {
        let now = chrono::Utc::now();
        let criteria = VehicleSearchCriteria {
            pickup_location: "Dehradun".to_string(),
            dropoff_location: "Rishikesh".to_string(),
            pickup_date: now,
            dropoff_date: now + chrono::Duration::days(2),
            number_of_travelers: Some(0),
        };

        assert_eq!(criteria.travelers(), None);
        assert_eq!(criteria.rental_duration(), chrono::Duration::days(2));
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("temple town".parse::<DestinationCategory>(), Ok(DestinationCategory::TempleTown));
        assert_eq!("Hill-Station".parse::<DestinationCategory>(), Ok(DestinationCategory::HillStation));
        assert!("beach".parse::<DestinationCategory>().is_err());
    }

    #[test]
    fn test_vehicle_without_capacity_never_seats() {
        let vehicle = Vehicle {
            id: "x".to_string(),
            model: "Unknown".to_string(),
            daily_rate: 1000,
            image_url: String::new(),
            max_capacity: None,
        };

        assert!(!vehicle.seats(1));
    }
}
