use crate::models::BookingPartner;
use urlencoding::encode;

impl BookingPartner {
    /// Name shown next to the booking link
    pub fn display_name(&self) -> &'static str {
        match self {
            BookingPartner::BookingCom => "Booking.com",
            BookingPartner::Agoda => "Agoda",
            BookingPartner::MakeMyTrip => "MakeMyTrip",
            BookingPartner::Goibibo => "Goibibo",
            BookingPartner::Airbnb => "Airbnb",
            BookingPartner::Hostelworld => "Hostelworld",
        }
    }

    /// Build the partner's search URL for a location label
    ///
    /// No request is made; the URL is only handed to the visitor.
    pub fn search_url(&self, location: &str) -> String {
        let location = location.trim();
        match self {
            BookingPartner::BookingCom => {
                format!("https://www.booking.com/searchresults.html?ss={}", encode(location))
            }
            BookingPartner::Agoda => {
                format!("https://www.agoda.com/search?city={}", encode(location))
            }
            BookingPartner::MakeMyTrip => format!(
                "https://www.makemytrip.com/hotels/hotel-listing/?city={}",
                encode(location)
            ),
            BookingPartner::Goibibo => format!(
                "https://www.goibibo.com/hotels/find-hotels-in-{}/",
                encode(&slugify(location))
            ),
            BookingPartner::Airbnb => {
                format!("https://www.airbnb.com/s/{}/homes", encode(location))
            }
            BookingPartner::Hostelworld => format!(
                "https://www.hostelworld.com/search?search_keywords={}",
                encode(location)
            ),
        }
    }
}

/// Lowercase and join whitespace runs with a single hyphen
fn slugify(value: &str) -> String {
    value
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string_encoding() {
        assert_eq!(
            BookingPartner::BookingCom.search_url("Khirsu Village"),
            "https://www.booking.com/searchresults.html?ss=Khirsu%20Village"
        );
        assert_eq!(
            BookingPartner::Airbnb.search_url("Rishikesh"),
            "https://www.airbnb.com/s/Rishikesh/homes"
        );
    }

    #[test]
    fn test_goibibo_uses_slug() {
        assert_eq!(
            BookingPartner::Goibibo.search_url("  Chopta   Tungnath Trek "),
            "https://www.goibibo.com/hotels/find-hotels-in-chopta-tungnath-trek/"
        );
    }

    #[test]
    fn test_coordinate_label_is_encoded() {
        assert_eq!(
            BookingPartner::Agoda.search_url("30.1978,78.8798"),
            "https://www.agoda.com/search?city=30.1978%2C78.8798"
        );
    }
}
