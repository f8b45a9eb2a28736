use crate::models::Location;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `from` - First point in degrees
/// * `to` - Second point in degrees
///
/// # Returns
/// Distance in kilometers
#[inline]
pub fn haversine_distance(from: &Location, to: &Location) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lon = (to.lng - from.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_distance() {
        // Dehradun to Rishikesh, about 34 km in a straight line
        let dehradun = Location::new(30.3165, 78.0322);
        let rishikesh = Location::new(30.0869, 78.2676);

        let distance = haversine_distance(&dehradun, &rishikesh);
        assert!((distance - 34.0).abs() < 6.0, "Distance should be ~34km, got {}", distance);
    }

    #[test]
    fn test_haversine_distance_zero() {
        let point = Location::new(30.1978, 78.8798);
        assert!(haversine_distance(&point, &point) < 0.01);
    }
}
