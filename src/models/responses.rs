use serde::{Deserialize, Serialize};
use crate::models::domain::{Destination, HotelSuggestion, Vehicle};

/// Response for the vehicle search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleSearchResponse {
    pub vehicles: Vec<Vehicle>,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
}

/// Response for the hotel search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelSearchResponse {
    pub location: String,
    pub hotels: Vec<HotelSuggestion>,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
}

/// Response for the destination listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationListResponse {
    pub destinations: Vec<Destination>,
    pub count: usize,
}

/// Feedback intake response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub success: bool,
    #[serde(rename = "receiptId")]
    pub receipt_id: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
