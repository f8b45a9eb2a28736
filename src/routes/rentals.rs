use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;

use super::{error_response, simulate_latency, AppState};
use crate::models::{VehicleSearchCriteria, VehicleSearchRequest, VehicleSearchResponse};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/rentals/search", web::post().to(search_vehicles));
}

/// Vehicle search endpoint
///
/// POST /api/v1/rentals/search
///
/// Request body:
/// ```json
/// {
///   "pickupLocation": "Dehradun Airport",
///   "dropoffLocation": "Rishikesh",
///   "pickupDate": "2025-05-01T09:00:00Z",
///   "dropoffDate": "2025-05-03T09:00:00Z",
///   "numberOfTravelers": 7
/// }
/// ```
///
/// An empty `vehicles` list means nothing is available; rentals shorter
/// than a day are never an error.
async fn search_vehicles(
    state: web::Data<AppState>,
    req: web::Json<VehicleSearchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for vehicle search: field_errors={:?}", errors);
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string());
    }

    let criteria = VehicleSearchCriteria::from(req.into_inner());

    tracing::info!(
        pickup = %criteria.pickup_location,
        dropoff = %criteria.dropoff_location,
        travelers = ?criteria.travelers(),
        "Searching vehicles"
    );

    simulate_latency(state.latency.vehicles).await;

    let vehicles = state
        .vehicles
        .find_available_vehicles(&criteria, &mut rand::rng());

    tracing::info!("Returning {} vehicles", vehicles.len());

    HttpResponse::Ok().json(VehicleSearchResponse {
        total_results: vehicles.len(),
        vehicles,
    })
}
