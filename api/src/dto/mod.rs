//! Request and response data transfer objects

pub mod error;
pub mod otp;
