//! OTP endpoint handlers

pub mod send;
pub mod verify;

pub use send::send_otp;
pub use verify::verify_otp;

use std::sync::Arc;

use jb_core::services::otp::{NotifierTrait, OtpService};

/// Application state that holds shared services
pub struct AppState<N: NotifierTrait> {
    pub otp_service: Arc<OtpService<N>>,
}
