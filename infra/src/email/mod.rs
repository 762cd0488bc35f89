//! Email Service Module
//!
//! This module provides email delivery implementations for sending one-time
//! verification codes. It includes an SMTP transport for production and a
//! mock implementation for development.
//!
//! ## Features
//!
//! - **Email Service Trait**: Common interface for all delivery providers
//! - **Mock Implementation**: Console output for development
//! - **SMTP Support**: Production delivery via an SMTP relay
//! - **Notifier Adapter**: Bridges any provider into the core notifier seam
//! - **Security**: Email masking in logs

pub mod email_service;
pub mod mock_email;
pub mod notifier_adapter;
pub mod smtp;

// Re-export commonly used types
pub use email_service::EmailService;
pub use mock_email::MockEmailService;
pub use notifier_adapter::EmailNotifierAdapter;
pub use smtp::SmtpEmailService;

#[cfg(test)]
mod tests;

/// Create an email service based on configuration
///
/// Returns the delivery implementation named by `config.provider`, falling
/// back to the mock service when the requested provider cannot be
/// initialized.
pub fn create_email_service(config: &crate::config::EmailConfig) -> Box<dyn EmailService> {
    match config.provider.as_str() {
        "mock" => Box::new(MockEmailService::new()),
        "smtp" => match SmtpEmailService::new(config) {
            Ok(service) => Box::new(service),
            Err(e) => {
                tracing::error!("Failed to initialize SMTP email service: {}", e);
                tracing::warn!("Falling back to mock email service");
                Box::new(MockEmailService::new())
            }
        },
        other => {
            tracing::warn!("Unknown email provider '{}', using mock implementation", other);
            Box::new(MockEmailService::new())
        }
    }
}
