use actix_web::{web, HttpResponse};
use validator::Validate;

use jb_core::services::otp::NotifierTrait;
use jb_shared::utils::email::mask_email;

use crate::dto::otp::{VerifyOtpRequest, VerifyOtpResponse};
use crate::handlers::error::bad_request;

use super::AppState;

/// Handler for POST /otp/verify
///
/// Checks a submitted code against the outstanding challenge for the email
/// address. Wrong, expired, consumed, and never-issued codes all produce the
/// same 400 response; the manager never raises an error for misuse.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "seeker@example.com",
///     "otp": "482913"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "message": "OTP verified successfully", "verified": true }
/// ```
///
/// ## Failure (400 Bad Request)
/// ```json
/// { "message": "Invalid or expired OTP", "verified": false }
/// ```
pub async fn verify_otp<N>(
    state: web::Data<AppState<N>>,
    request: web::Json<VerifyOtpRequest>,
) -> HttpResponse
where
    N: NotifierTrait + 'static,
{
    if request.validate().is_err() {
        return bad_request("Email and OTP are required");
    }

    log::info!("Verifying OTP for {}", mask_email(&request.email));

    if state.otp_service.verify(&request.email, &request.otp).await {
        HttpResponse::Ok().json(VerifyOtpResponse {
            message: "OTP verified successfully".to_string(),
            verified: true,
        })
    } else {
        HttpResponse::BadRequest().json(VerifyOtpResponse {
            message: "Invalid or expired OTP".to_string(),
            verified: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_request_validation() {
        let valid = VerifyOtpRequest {
            email: "user@example.com".to_string(),
            otp: "123456".to_string(),
        };
        assert!(valid.validate().is_ok());

        let missing_code = VerifyOtpRequest {
            email: "user@example.com".to_string(),
            otp: String::new(),
        };
        assert!(missing_code.validate().is_err());

        let missing_email = VerifyOtpRequest {
            email: String::new(),
            otp: "123456".to_string(),
        };
        assert!(missing_email.validate().is_err());
    }
}
