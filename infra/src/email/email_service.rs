//! Email Service Interface
//!
//! Defines the trait for email delivery implementations that carry
//! verification codes and other transactional mail.

use async_trait::async_trait;

use crate::InfrastructureError;

/// Email service trait for sending transactional mail
///
/// Implementations include:
/// - SMTP relay transport
/// - Mock implementation for development
#[async_trait]
pub trait EmailService: Send + Sync {
    /// Send an email message
    ///
    /// # Arguments
    ///
    /// * `to` - The recipient address
    /// * `subject` - Message subject line
    /// * `body` - Plain-text message body
    ///
    /// # Returns
    ///
    /// * `Ok(message_id)` - Unique identifier for the sent message
    /// * `Err(InfrastructureError)` - If sending fails
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<String, InfrastructureError>;

    /// Send a one-time verification code
    ///
    /// Convenience method that formats the code message in the
    /// application's standard wording.
    async fn send_otp_code(&self, to: &str, code: &str) -> Result<String, InfrastructureError> {
        let body = format!(
            "Your Jobbe verification code is: {}. This code will expire in 5 minutes.",
            code
        );
        self.send_email(to, "Your Jobbe verification code", &body).await
    }

    /// Get the service provider name
    fn provider_name(&self) -> &str;

    /// Check if the service is available
    ///
    /// Default implementation always returns true.
    async fn is_available(&self) -> bool {
        true
    }
}
