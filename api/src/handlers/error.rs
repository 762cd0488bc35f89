//! Mapping from domain errors to HTTP responses

use actix_web::HttpResponse;

use jb_core::errors::DomainError;

use crate::dto::error::ErrorResponse;

/// Build a 400 response with a plain message body
pub fn bad_request(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse::new(message))
}

/// Map a domain error to an HTTP response
///
/// Validation errors become 400s; everything else is an infrastructure
/// fault surfaced as a 500 with the caller-supplied message and the error
/// detail in the body.
pub fn handle_domain_error(error: &DomainError, failure_message: &str) -> HttpResponse {
    match error {
        DomainError::Validation { message } => bad_request(message),
        DomainError::Internal { .. } => HttpResponse::InternalServerError()
            .json(ErrorResponse::with_detail(failure_message, error.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let error = DomainError::Validation {
            message: "bad input".to_string(),
        };
        let response = handle_domain_error(&error, "Failed to send OTP");
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_maps_to_server_error() {
        let error = DomainError::Internal {
            message: "rng offline".to_string(),
        };
        let response = handle_domain_error(&error, "Failed to send OTP");
        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
