//! Outbound ports — interfaces for side effects leaving the application
//!
//! [`Mailer`] decouples the services that compose verification and bill
//! emails from the concrete SMTP transport. The single production
//! implementation is [`SmtpMailer`](crate::infrastructure::email::SmtpMailer).
//!
//! Sends are fire-and-forget from the caller's perspective: a failure is
//! reported back to the initiating user in the API response, never
//! retried, and never rolls back the write that triggered it.

use async_trait::async_trait;

use crate::shared::DomainResult;

/// Port for delivering plain-text email.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver one message. Errors map to [`DomainError::EmailDelivery`]
    /// and carry a human-readable reason.
    ///
    /// [`DomainError::EmailDelivery`]: crate::shared::DomainError::EmailDelivery
    async fn send(&self, to: &str, subject: &str, body: &str) -> DomainResult<()>;
}
