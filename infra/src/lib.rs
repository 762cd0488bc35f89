//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Jobbe application.
//! It provides concrete implementations for external services, currently the
//! email delivery channel used by the OTP subsystem.

/// Email service module - delivery channel implementations
pub mod email;

/// Configuration module for infrastructure services
pub mod config {
    //! Configuration management for infrastructure services

    use serde::{Deserialize, Serialize};

    /// Email delivery configuration
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct EmailConfig {
        /// Delivery provider ("smtp", "mock")
        pub provider: String,
        /// SMTP relay hostname
        pub smtp_host: String,
        /// SMTP username
        pub smtp_username: String,
        /// SMTP password
        pub smtp_password: String,
        /// Sender address used on outgoing mail
        pub from_address: String,
    }

    impl Default for EmailConfig {
        fn default() -> Self {
            Self {
                provider: "mock".to_string(),
                smtp_host: String::new(),
                smtp_username: String::new(),
                smtp_password: String::new(),
                from_address: "no-reply@jobbe.io".to_string(),
            }
        }
    }

    impl EmailConfig {
        /// Load email configuration from environment variables
        pub fn from_env() -> Self {
            dotenvy::dotenv().ok();

            let defaults = Self::default();
            Self {
                provider: std::env::var("EMAIL_PROVIDER").unwrap_or(defaults.provider),
                smtp_host: std::env::var("SMTP_HOST").unwrap_or(defaults.smtp_host),
                smtp_username: std::env::var("SMTP_USERNAME").unwrap_or(defaults.smtp_username),
                smtp_password: std::env::var("SMTP_PASSWORD").unwrap_or(defaults.smtp_password),
                from_address: std::env::var("EMAIL_FROM_ADDRESS").unwrap_or(defaults.from_address),
            }
        }
    }
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// SMTP transport error
    #[error("SMTP transport error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    /// Invalid email address
    #[error("Email address error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// Message construction error
    #[error("Email build error: {0}")]
    Message(#[from] lettre::error::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Email service error
    #[error("Email service error: {0}")]
    Email(String),
}
