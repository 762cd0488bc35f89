//! Business services containing domain logic and use cases.

pub mod otp;

// Re-export commonly used types
pub use otp::{
    Clock, NotifierTrait, OtpConfig, OtpService, OtpStore, SystemClock, VerifyOutcome,
};
