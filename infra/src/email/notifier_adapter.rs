//! Adapter connecting email services to the core notifier seam
//!
//! The core OTP service only knows the `NotifierTrait` interface; this
//! adapter lets any `EmailService` implementation fill that role.

use std::sync::Arc;

use async_trait::async_trait;

use jb_core::services::otp::NotifierTrait;

use super::email_service::EmailService;

/// Wraps an `EmailService` as the core `NotifierTrait`
pub struct EmailNotifierAdapter {
    service: Arc<dyn EmailService>,
}

impl EmailNotifierAdapter {
    /// Create a new adapter around a delivery implementation
    pub fn new(service: Arc<dyn EmailService>) -> Self {
        Self { service }
    }

    /// Name of the wrapped provider
    pub fn provider_name(&self) -> &str {
        self.service.provider_name()
    }
}

#[async_trait]
impl NotifierTrait for EmailNotifierAdapter {
    async fn deliver(&self, email: &str, code: &str) -> Result<String, String> {
        self.service
            .send_otp_code(email, code)
            .await
            .map_err(|e| e.to_string())
    }
}
