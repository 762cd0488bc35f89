//! SMTP Email Service Implementation
//!
//! Production delivery over an authenticated SMTP relay.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;
use uuid::Uuid;

use jb_shared::utils::email::mask_email;

use super::email_service::EmailService;
use crate::config::EmailConfig;
use crate::InfrastructureError;

/// Email service backed by an SMTP relay
pub struct SmtpEmailService {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from_mailbox: Mailbox,
}

impl SmtpEmailService {
    /// Create a new SMTP email service from configuration
    ///
    /// # Arguments
    ///
    /// * `config` - Email configuration with relay host and credentials
    ///
    /// # Returns
    ///
    /// * `Ok(SmtpEmailService)` - Ready-to-use service
    /// * `Err(InfrastructureError)` - If the configuration is incomplete or
    ///   the relay address cannot be resolved
    pub fn new(config: &EmailConfig) -> Result<Self, InfrastructureError> {
        if config.smtp_host.is_empty() {
            return Err(InfrastructureError::Config(
                "SMTP_HOST is not configured".to_string(),
            ));
        }

        let from_mailbox: Mailbox = config
            .from_address
            .parse()
            .map_err(|e| InfrastructureError::Config(format!("invalid from address: {}", e)))?;

        let credentials =
            Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
            .credentials(credentials)
            .build();

        Ok(Self {
            mailer,
            from_mailbox,
        })
    }
}

#[async_trait]
impl EmailService for SmtpEmailService {
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<String, InfrastructureError> {
        let recipient: Mailbox = to.parse()?;

        let email = Message::builder()
            .from(self.from_mailbox.clone())
            .to(recipient)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())?;

        self.mailer.send(email).await?;

        // The relay does not hand back a queue id; generate one for tracing.
        let message_id = format!("smtp_{}", Uuid::new_v4());

        info!(
            target: "email_service",
            provider = "smtp",
            to = %mask_email(to),
            message_id = %message_id,
            "Email handed to SMTP relay"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Smtp"
    }
}
