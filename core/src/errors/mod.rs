//! Domain-specific error types and error handling.

use thiserror::Error;

/// Core domain errors
///
/// User-level verification failures (wrong, expired, or exhausted codes)
/// never surface here; they are reported through [`VerifyOutcome`] and the
/// boolean result of `verify`. These variants cover input validation at the
/// API boundary and genuine infrastructure faults.
///
/// [`VerifyOutcome`]: crate::services::otp::VerifyOutcome
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

pub type DomainResult<T> = Result<T, DomainError>;
