use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::models::domain::VehicleSearchCriteria;

/// Request to search rental vehicles
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VehicleSearchRequest {
    #[validate(length(min = 1, max = 200))]
    #[serde(alias = "pickup_location", rename = "pickupLocation")]
    pub pickup_location: String,
    #[validate(length(min = 1, max = 200))]
    #[serde(alias = "dropoff_location", rename = "dropoffLocation")]
    pub dropoff_location: String,
    #[serde(alias = "pickup_date", rename = "pickupDate")]
    pub pickup_date: chrono::DateTime<chrono::Utc>,
    #[serde(alias = "dropoff_date", rename = "dropoffDate")]
    pub dropoff_date: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    #[serde(alias = "number_of_travelers", rename = "numberOfTravelers")]
    pub number_of_travelers: Option<u32>,
}

impl From<VehicleSearchRequest> for VehicleSearchCriteria {
    fn from(req: VehicleSearchRequest) -> Self {
        Self {
            pickup_location: req.pickup_location.trim().to_string(),
            dropoff_location: req.dropoff_location.trim().to_string(),
            pickup_date: req.pickup_date,
            dropoff_date: req.dropoff_date,
            number_of_travelers: req.number_of_travelers,
        }
    }
}

/// Query string for the hotel search
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct HotelSearchQuery {
    #[validate(length(min = 1, max = 200))]
    pub location: String,
}

/// Query string for the destination listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DestinationListQuery {
    pub category: Option<String>,
}

/// Feedback form submission
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FeedbackRequest {
    #[validate(length(max = 100))]
    #[serde(default, deserialize_with = "blank_as_none")]
    pub name: Option<String>,
    #[validate(email)]
    #[serde(default, deserialize_with = "blank_as_none")]
    pub email: Option<String>,
    #[validate(length(max = 5000))]
    #[serde(default)]
    pub feedback: String,
}

/// Trim optional form fields; blank ones count as not given
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty()))
}
