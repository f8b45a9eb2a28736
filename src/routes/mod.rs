// Route exports
pub mod feedback;
pub mod health;
pub mod hotels;
pub mod locations;
pub mod rentals;

use actix_web::{error, http::StatusCode, web, HttpResponse};
use std::sync::Arc;
use std::time::Duration;

use crate::config::MatchingSettings;
use crate::core::{DestinationCatalog, HotelMatcher, VehicleMatcher};
use crate::models::ErrorResponse;
use crate::services::FeedbackService;

/// Simulated backend latency per endpoint
#[derive(Debug, Clone, Copy, Default)]
pub struct Latency {
    pub vehicles: Duration,
    pub hotels: Duration,
    pub feedback: Duration,
}

impl From<&MatchingSettings> for Latency {
    fn from(settings: &MatchingSettings) -> Self {
        Self {
            vehicles: Duration::from_millis(settings.vehicle_latency_ms),
            hotels: Duration::from_millis(settings.hotel_latency_ms),
            feedback: Duration::from_millis(settings.feedback_latency_ms),
        }
    }
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub vehicles: Arc<VehicleMatcher>,
    pub hotels: Arc<HotelMatcher>,
    pub destinations: Arc<DestinationCatalog>,
    pub feedback: Arc<FeedbackService>,
    pub latency: Latency,
}

impl AppState {
    /// State over the built-in catalogs with no simulated latency
    pub fn with_default_catalogs(feedback_recipient: impl Into<String>) -> Self {
        Self {
            vehicles: Arc::new(VehicleMatcher::with_default_catalog()),
            hotels: Arc::new(HotelMatcher::with_default_catalog()),
            destinations: Arc::new(DestinationCatalog::with_default_catalog()),
            feedback: Arc::new(FeedbackService::new(feedback_recipient)),
            latency: Latency::default(),
        }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(health::configure)
            .configure(rentals::configure)
            .configure(hotels::configure)
            .configure(locations::configure)
            .configure(feedback::configure),
    );
}

/// Wait out the simulated backend latency
pub(crate) async fn simulate_latency(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

pub(crate) fn error_response(status: StatusCode, error: &str, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message: message.into(),
        status_code: status.as_u16(),
    })
}

/// JSON error response for payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("Query payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latency_from_settings() {
        let settings = MatchingSettings {
            vehicle_latency_ms: 1200,
            hotel_latency_ms: 1000,
            feedback_latency_ms: 0,
            max_vehicle_results: None,
        };

        let latency = Latency::from(&settings);
        assert_eq!(latency.vehicles, Duration::from_millis(1200));
        assert_eq!(latency.hotels, Duration::from_secs(1));
        assert!(latency.feedback.is_zero());
    }

    #[test]
    fn test_zero_latency_returns_immediately() {
        tokio_test::block_on(simulate_latency(Duration::ZERO));
    }
}
