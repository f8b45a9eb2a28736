use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;

use super::{error_response, simulate_latency, AppState};
use crate::models::{HotelQuery, HotelSearchQuery, HotelSearchResponse};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/hotels", web::get().to(search_hotels));
}

/// Hotel search endpoint
///
/// GET /api/v1/hotels?location={name or "lat, lng"}
async fn search_hotels(
    state: web::Data<AppState>,
    query: web::Query<HotelSearchQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string());
    }

    let location = query.location.trim();
    if location.is_empty() {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Missing location",
            "Enter a place name or coordinates like '29.38, 79.45'",
        );
    }

    let hotel_query = HotelQuery::parse(location);
    tracing::info!("Searching hotels for {:?}", hotel_query);

    simulate_latency(state.latency.hotels).await;

    let hotels = state.hotels.hotels_for(&hotel_query, &mut rand::rng());

    HttpResponse::Ok().json(HotelSearchResponse {
        location: location.to_string(),
        total_results: hotels.len(),
        hotels,
    })
}
