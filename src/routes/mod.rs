//! HTTP handlers.

use actix_web::HttpResponse;
use serde_json::json;

use crate::services::ServiceError;

pub mod api;

/// Maps a service failure to its HTTP response, logging it on the way.
///
/// Internal details are only exposed for invalid parameters.
pub fn error_response(context: &str, err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::InvalidParameter(message) => {
            log::warn!("{context}: {message}");
            HttpResponse::BadRequest().json(json!({ "error": message }))
        }
        ServiceError::StoreUnavailable(err) => {
            log::error!("{context}: {err}");
            HttpResponse::ServiceUnavailable().json(json!({ "error": "storage unavailable" }))
        }
        ServiceError::InternalInvariantViolation(message) => {
            log::error!("{context}: {message}");
            HttpResponse::InternalServerError().json(json!({ "error": "internal error" }))
        }
    }
}
