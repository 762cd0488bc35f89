//! OTP service module for email-based verification
//!
//! This module provides the complete one-time-password workflow:
//! - Secure code generation
//! - In-memory storage with lazy expiry and attempt tracking
//! - Verification with single-use and attempt-cap semantics
//! - Dispatch to a pluggable notifier for delivery

mod clock;
mod config;
mod service;
mod store;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use clock::{Clock, SystemClock};
pub use config::OtpConfig;
pub use service::OtpService;
pub use store::OtpStore;
pub use traits::NotifierTrait;
pub use types::VerifyOutcome;
