//! SMTP mailer backed by lettre

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::{info, warn};

use crate::application::ports::Mailer;
use crate::config::EmailConfig;
use crate::shared::{DomainError, DomainResult};

/// Async SMTP transport (STARTTLS relay) for verification and bill emails.
///
/// When `email.enabled = false` no transport is built and every send
/// reports a delivery failure; writes that trigger emails still succeed.
pub struct SmtpMailer {
    config: EmailConfig,
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
}

impl SmtpMailer {
    pub fn new(config: EmailConfig) -> DomainResult<Self> {
        if !config.enabled {
            return Ok(Self {
                config,
                transport: None,
            });
        }

        let creds = Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| DomainError::EmailDelivery(format!("Failed to create SMTP relay: {}", e)))?
            .port(config.smtp_port)
            .credentials(creds)
            .build();

        Ok(Self {
            config,
            transport: Some(transport),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> DomainResult<()> {
        let Some(transport) = self.transport.as_ref() else {
            warn!(to, subject, "Email disabled in config; not sending");
            return Err(DomainError::EmailDelivery(
                "Email delivery is disabled".to_string(),
            ));
        };

        let from: Mailbox = format!("{} <{}>", self.config.from_name, self.config.from_address)
            .parse()
            .map_err(|e| DomainError::EmailDelivery(format!("Invalid from address: {}", e)))?;

        let to_mailbox: Mailbox = to
            .parse()
            .map_err(|e| DomainError::EmailDelivery(format!("Invalid recipient: {}", e)))?;

        let message = Message::builder()
            .from(from)
            .to(to_mailbox)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| DomainError::EmailDelivery(format!("Failed to build message: {}", e)))?;

        transport
            .send(message)
            .await
            .map_err(|e| DomainError::EmailDelivery(format!("Failed to send email: {}", e)))?;

        info!(to, subject, "Email sent");
        Ok(())
    }
}
