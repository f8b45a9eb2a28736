//! Static catalogs backing the simulated searches.
//!
//! Each call builds a fresh copy; callers own the result and nothing here
//! is ever mutated.

use crate::models::{BookingPartner, Destination, DestinationCategory, Hotel, Location, Vehicle};

const VEHICLE_IMAGE: &str = "https://placehold.co/400x300.png";

fn vehicle(id: &str, model: &str, daily_rate: u32, max_capacity: u32) -> Vehicle {
    Vehicle {
        id: id.to_string(),
        model: model.to_string(),
        daily_rate,
        image_url: VEHICLE_IMAGE.to_string(),
        max_capacity: Some(max_capacity),
    }
}

/// Rental fleet
pub fn vehicles() -> Vec<Vehicle> {
    vec![
        vehicle("1", "Maruti Suzuki Dzire", 2500, 5),
        vehicle("2", "Toyota Innova Crysta", 4500, 9),
        vehicle("3", "Mahindra Marazzo", 3800, 8),
        vehicle("4", "Tempo Traveller", 6000, 12),
        vehicle("5", "Honda Amaze", 2700, 5),
        vehicle("6", "Maruti Suzuki Ertiga", 3500, 7),
    ]
}

fn hotel(id: &str, name: &str, image_seed: &str, rating: f32, partner: BookingPartner) -> Hotel {
    Hotel {
        id: id.to_string(),
        name: name.to_string(),
        image_url: format!("https://picsum.photos/400/300?random={}", image_seed),
        rating,
        booking_partner: Some(partner),
    }
}

/// Partner hotels
pub fn hotels() -> Vec<Hotel> {
    vec![
        hotel("hotel1", "The Himalayan View", "himalayan", 4.5, BookingPartner::BookingCom),
        hotel("hotel2", "Riverside Inn", "riverside", 3.8, BookingPartner::Agoda),
        hotel("hotel3", "Forest Retreat", "forest", 4.2, BookingPartner::MakeMyTrip),
        hotel("hotel4", "Peak Paradise Lodge", "peak", 4.8, BookingPartner::Goibibo),
        hotel("hotel5", "Valley Homestay", "valley", 4.0, BookingPartner::Airbnb),
        hotel("hotel6", "Budget Backpackers Hostel", "hostel", 3.2, BookingPartner::Hostelworld),
    ]
}

fn destination(
    id: &str,
    name: &str,
    description: &str,
    image_seed: &str,
    category: DestinationCategory,
    lat: f64,
    lng: f64,
) -> Destination {
    Destination {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        image_url: format!("https://picsum.photos/seed/{}/400/300", image_seed),
        category,
        coordinates: Location::new(lat, lng),
    }
}

/// Hidden-location listings
pub fn destinations() -> Vec<Destination> {
    use DestinationCategory::*;

    vec![
        destination(
            "1",
            "Khirsu Village",
            "A serene hill station offering panoramic views of the Himalayas, surrounded by oak and deodar forests.",
            "khirsu",
            Village,
            30.1978,
            78.8798,
        ),
        destination(
            "2",
            "Chopta Tungnath Trek",
            "Known as \"Mini Switzerland\", with breathtaking meadows and the highest Shiva temple in the world.",
            "chopta",
            Trek,
            30.4851,
            79.3331,
        ),
        destination(
            "3",
            "Binsar Wildlife Sanctuary",
            "Home to diverse flora and fauna, perfect for nature lovers exploring dense forests.",
            "binsar",
            Nature,
            29.6949,
            79.7534,
        ),
        destination(
            "4",
            "Patal Bhuvaneshwar",
            "A mystical limestone cave temple complex deep underground.",
            "patal",
            Spiritual,
            29.7078,
            80.1050,
        ),
        destination(
            "5",
            "Munsiyari",
            "A picturesque hamlet with clear views of the Panchachuli peaks.",
            "munsiyari",
            Viewpoint,
            30.0667,
            80.2333,
        ),
        destination(
            "6",
            "Dodital Lake Trek",
            "A freshwater high-altitude lake surrounded by dense forests, reached by a moderate trek.",
            "dodital",
            Trek,
            30.8373,
            78.4777,
        ),
        destination(
            "7",
            "Lansdowne",
            "A quiet cantonment town known for its colonial charm and oak and blue pine forests.",
            "lansdowne",
            Cantonment,
            29.8378,
            78.6865,
        ),
        destination(
            "8",
            "Mukteshwar",
            "Known for its cliff-top temple, fruit orchards and panoramic Himalayan views.",
            "mukteshwar",
            TempleTown,
            29.4722,
            79.6479,
        ),
        destination(
            "9",
            "Chakrata",
            "A secluded hill station with Tiger Falls and plenty of trekking.",
            "chakrata",
            HillStation,
            30.7026,
            77.8694,
        ),
        destination(
            "10",
            "Pauri",
            "Views of snow-clad peaks like Banderpunch and Swargarohini over green valleys.",
            "pauri",
            Viewpoint,
            30.1498,
            78.7748,
        ),
    ]
}
