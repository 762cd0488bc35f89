use actix_web::{web, HttpResponse};
use validator::Validate;

use jb_core::services::otp::NotifierTrait;
use jb_shared::utils::email::{is_valid_email, mask_email};

use crate::dto::otp::{SendOtpRequest, SendOtpResponse};
use crate::handlers::error::{bad_request, handle_domain_error};

use super::AppState;

/// Handler for POST /otp/send
///
/// Issues a one-time verification code for the given email address and
/// dispatches it through the configured delivery channel.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "seeker@example.com"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "message": "OTP sent successfully" }
/// ```
///
/// ## Errors
/// - 400 Bad Request: missing or malformed email
/// - 500 Internal Server Error: code issuance failed (infrastructure fault;
///   delivery failure alone does not produce this)
pub async fn send_otp<N>(
    state: web::Data<AppState<N>>,
    request: web::Json<SendOtpRequest>,
) -> HttpResponse
where
    N: NotifierTrait + 'static,
{
    if request.validate().is_err() || !is_valid_email(&request.email) {
        log::warn!(
            "Rejected send_otp request with malformed email: {}",
            mask_email(&request.email)
        );
        return bad_request("A valid email address is required");
    }

    log::info!("Issuing OTP for {}", mask_email(&request.email));

    match state.otp_service.issue(&request.email).await {
        Ok(_code) => HttpResponse::Ok().json(SendOtpResponse {
            message: "OTP sent successfully".to_string(),
        }),
        Err(error) => {
            log::error!(
                "Failed to issue OTP for {}: {}",
                mask_email(&request.email),
                error
            );
            handle_domain_error(&error, "Failed to send OTP")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_request_validation() {
        let valid = SendOtpRequest {
            email: "user@example.com".to_string(),
        };
        assert!(valid.validate().is_ok());
        assert!(is_valid_email(&valid.email));

        let empty = SendOtpRequest {
            email: String::new(),
        };
        assert!(empty.validate().is_err());

        let malformed = SendOtpRequest {
            email: "not-an-email".to_string(),
        };
        assert!(malformed.validate().is_ok());
        assert!(!is_valid_email(&malformed.email));
    }
}
