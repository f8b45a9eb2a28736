use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;

use super::{error_response, simulate_latency, AppState};
use crate::models::{FeedbackRequest, FeedbackResponse};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/feedback", web::post().to(submit_feedback));
}

/// Feedback intake endpoint
///
/// POST /api/v1/feedback
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "email": "string",
///   "feedback": "string"
/// }
/// ```
async fn submit_feedback(
    state: web::Data<AppState>,
    req: web::Json<FeedbackRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string());
    }

    simulate_latency(state.latency.feedback).await;

    match state.feedback.submit(req.into_inner()) {
        Ok(receipt) => HttpResponse::Ok().json(FeedbackResponse {
            success: true,
            receipt_id: receipt.receipt_id.to_string(),
        }),
        Err(e) => error_response(StatusCode::BAD_REQUEST, "Invalid feedback", e.to_string()),
    }
}
