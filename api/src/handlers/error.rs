//! Mapping from domain errors to HTTP responses
//!
//! Every documented verification failure is a 400 with the error string
//! surfaced verbatim; delivery and internal failures are a 500. Internal
//! error details never reach the client.

use actix_web::{http::StatusCode, HttpResponse};

use sv_core::errors::{DomainError, VerificationError};
use sv_shared::types::response::ErrorBody;

/// Convert a domain error into the endpoint's error response
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    let status = match error {
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Verification(VerificationError::DeliveryFailed) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        DomainError::Verification(_) => StatusCode::BAD_REQUEST,
        DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let message = match error {
        // Store/internal details stay in the logs
        DomainError::Internal { .. } => "Internal server error".to_string(),
        _ => error.to_string(),
    };

    HttpResponse::build(status).json(ErrorBody::new(message))
}

/// 400 response with a literal error message
pub fn bad_request(message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorBody::new(message))
}
