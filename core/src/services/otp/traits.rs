//! Traits for notifier integration

use async_trait::async_trait;

/// Trait for delivering one-time codes to users
///
/// Implemented by the infrastructure layer (SMTP transport, console mock).
/// Delivery is best-effort from the OTP manager's point of view: a failed
/// `deliver` never invalidates the stored code.
#[async_trait]
pub trait NotifierTrait: Send + Sync {
    /// Deliver a verification code to the given email address
    ///
    /// Returns a provider message id on success.
    async fn deliver(&self, email: &str, code: &str) -> Result<String, String>;
}
