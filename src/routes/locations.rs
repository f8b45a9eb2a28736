use actix_web::{http::StatusCode, web, HttpResponse, Responder};

use super::{error_response, AppState};
use crate::models::{DestinationCategory, DestinationListQuery, DestinationListResponse};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/locations", web::get().to(list_locations))
        .route("/locations/{id}", web::get().to(get_location));
}

/// Destination listing
///
/// GET /api/v1/locations?category={category}
async fn list_locations(
    state: web::Data<AppState>,
    query: web::Query<DestinationListQuery>,
) -> impl Responder {
    let category = match query.category.as_deref().map(str::parse::<DestinationCategory>) {
        None => None,
        Some(Ok(category)) => Some(category),
        Some(Err(message)) => {
            return error_response(StatusCode::BAD_REQUEST, "Invalid category", message);
        }
    };

    let destinations = state.destinations.list(category);

    HttpResponse::Ok().json(DestinationListResponse {
        count: destinations.len(),
        destinations,
    })
}

/// Destination detail
///
/// GET /api/v1/locations/{id}
async fn get_location(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();

    match state.destinations.get(&id) {
        Some(destination) => HttpResponse::Ok().json(destination),
        None => {
            tracing::debug!("Location {} not found", id);
            error_response(
                StatusCode::NOT_FOUND,
                "Location not found",
                format!("No location with id {}", id),
            )
        }
    }
}
