//! Notification service for composing and dispatching tenant/landlord email
//!
//! All sends are one-way. A failed send never rolls back the write that
//! triggered it; the outcome is reported back to the initiating user.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::application::ports::Mailer;
use crate::config::EmailConfig;
use crate::domain::{BillingRecord, DomainResult, Tenant};

/// Outcome of an email dispatch attempt that is allowed to skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailDispatch {
    Sent,
    /// Recipient missing or unverified; the triggering write still succeeded.
    Skipped,
}

impl EmailDispatch {
    pub fn was_sent(&self) -> bool {
        matches!(self, Self::Sent)
    }
}

/// Composes plain-text messages and hands them to the [`Mailer`] port.
pub struct NotificationService {
    mailer: Arc<dyn Mailer>,
    config: EmailConfig,
}

impl NotificationService {
    pub fn new(mailer: Arc<dyn Mailer>, config: EmailConfig) -> Self {
        Self { mailer, config }
    }

    fn amount(&self, value: Decimal) -> String {
        format!("{:.2} {}", value, self.config.currency)
    }

    /// Account verification mail for a freshly registered landlord.
    pub async fn send_user_verification(
        &self,
        to: &str,
        username: &str,
        token: &str,
    ) -> DomainResult<()> {
        let subject = "Verify your Texnouz Ijara account";
        let body = format!(
            "Hi {},\n\n\
             Welcome to Texnouz Ijara. Confirm your email address to activate\n\
             your account:\n\n\
             {}/api/v1/auth/verify-email?token={}\n\n\
             The link expires after a limited time. If you did not register,\n\
             ignore this message.",
            username, self.config.public_base_url, token
        );
        self.mailer.send(to, subject, &body).await?;
        info!(to, "Verification email sent");
        Ok(())
    }

    /// Test mail proving billing delivery works for a tenant's address.
    ///
    /// The caller marks the tenant verified on success and unverified on
    /// failure, mirroring the delivery-based verification flow.
    pub async fn send_tenant_test(&self, tenant: &Tenant, room_label: &str) -> DomainResult<()> {
        let Some(email) = tenant.email.as_deref() else {
            warn!(tenant_id = tenant.id, "Tenant has no email; skipping test mail");
            return Ok(());
        };

        let subject = "Tenant email verification";
        let body = format!(
            "Hi {},\n\n\
             This is a test email to verify billing delivery for your room.\n\
             Room: {}\n\
             If you received this, your email is verified.",
            tenant.name, room_label
        );
        self.mailer.send(email, subject, &body).await
    }

    /// Default plain-text summary for one billing record.
    pub fn bill_summary(&self, tenant: &Tenant, room_label: &str, record: &BillingRecord) -> String {
        format!(
            "Hi {},\n\n\
             Here is your billing summary:\n\
             Room: {}\n\
             Billing month: {}\n\
             Units: {} -> {}\n\
             Electricity: {}\n\
             Rent: {}\n\
             Water: {}\n\
             Waste: {}\n\
             Total: {}\n\n\
             Thank you.",
            tenant.name,
            room_label,
            record.billing_month,
            record.previous_units,
            record.current_units,
            self.amount(record.electricity),
            self.amount(record.rent),
            self.amount(record.water),
            self.amount(record.waste),
            self.amount(record.total),
        )
    }

    /// Send one bill to the tenant, or skip when the address is missing
    /// or unverified.
    pub async fn send_bill(
        &self,
        tenant: &Tenant,
        room_label: &str,
        record: &BillingRecord,
        custom_message: Option<&str>,
    ) -> DomainResult<EmailDispatch> {
        if !tenant.can_receive_email() {
            return Ok(EmailDispatch::Skipped);
        }
        let email = tenant.email.as_deref().unwrap_or_default();

        let subject = format!("Bill for {} - {}", room_label, record.billing_month);
        let body = match custom_message {
            Some(text) => text.to_string(),
            None => self.bill_summary(tenant, room_label, record),
        };
        self.mailer.send(email, &subject, &body).await?;
        Ok(EmailDispatch::Sent)
    }

    /// Summary of every outstanding bill of a room.
    pub fn pending_bills_summary(
        &self,
        tenant: &Tenant,
        room_label: &str,
        bills: &[BillingRecord],
    ) -> String {
        let mut lines = vec![
            format!("Hi {},", tenant.name),
            String::new(),
            "Here is your pending billing summary:".to_string(),
            format!("Room: {}", room_label),
            String::new(),
        ];

        for bill in bills {
            lines.push(format!("Billing month: {}", bill.billing_month));
            lines.push(format!("Units: {} -> {}", bill.previous_units, bill.current_units));
            lines.push(format!("Electricity: {}", self.amount(bill.electricity)));
            lines.push(format!("Rent: {}", self.amount(bill.rent)));
            lines.push(format!("Water: {}", self.amount(bill.water)));
            lines.push(format!("Waste: {}", self.amount(bill.waste)));
            lines.push(format!("Total: {}", self.amount(bill.total)));
            lines.push(format!("Paid: {}", self.amount(bill.total_paid)));
            lines.push(format!("Status: {}", bill.status));
            lines.push(String::new());
        }

        lines.push("Thank you.".to_string());
        lines.join("\n")
    }

    /// Send the outstanding-bills reminder, or skip for an unverified address.
    pub async fn send_pending_bills(
        &self,
        tenant: &Tenant,
        room_label: &str,
        bills: &[BillingRecord],
        custom_message: Option<&str>,
    ) -> DomainResult<EmailDispatch> {
        if !tenant.can_receive_email() {
            return Ok(EmailDispatch::Skipped);
        }
        let email = tenant.email.as_deref().unwrap_or_default();

        let subject = format!("Pending bills for {}", room_label);
        let body = match custom_message {
            Some(text) => text.to_string(),
            None => self.pending_bills_summary(tenant, room_label, bills),
        };
        self.mailer.send(email, &subject, &body).await?;
        Ok(EmailDispatch::Sent)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{NaiveDate, Utc};
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    use crate::domain::PaymentStatus;
    use crate::shared::{DomainError, DomainResult};

    #[derive(Default)]
    struct RecordingMailer {
        sent: Mutex<Vec<(String, String, String)>>,
        fail: bool,
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, to: &str, subject: &str, body: &str) -> DomainResult<()> {
            if self.fail {
                return Err(DomainError::EmailDelivery("boom".to_string()));
            }
            self.sent
                .lock()
                .unwrap()
                .push((to.to_string(), subject.to_string(), body.to_string()));
            Ok(())
        }
    }

    fn sample_tenant(email: Option<&str>, verified: bool) -> Tenant {
        Tenant {
            id: 1,
            room_id: 1,
            name: "Aziz".to_string(),
            contact: "998901234567".to_string(),
            email: email.map(String::from),
            email_verified: verified,
            move_in_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            rent_price: dec!(5000.00),
            electricity_price_per_unit: dec!(15.00),
            water_price: dec!(200.00),
            waste_price: dec!(0.00),
            initial_unit: 100,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn sample_record() -> BillingRecord {
        BillingRecord {
            id: 1,
            room_id: 1,
            billing_month: "2026-08".to_string(),
            previous_units: 100,
            current_units: 150,
            electricity: dec!(750.00),
            water: dec!(200.00),
            rent: dec!(5000.00),
            waste: dec!(0.00),
            total: dec!(5950.00),
            total_paid: dec!(0.00),
            payment_received_date: None,
            remarks: None,
            status: PaymentStatus::Unpaid,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn service(mailer: Arc<RecordingMailer>) -> NotificationService {
        NotificationService::new(mailer, EmailConfig::default())
    }

    #[tokio::test]
    async fn bill_email_skipped_for_unverified_tenant() {
        let mailer = Arc::new(RecordingMailer::default());
        let svc = service(mailer.clone());
        let tenant = sample_tenant(Some("aziz@example.com"), false);

        let outcome = svc
            .send_bill(&tenant, "Yunusobod - 101", &sample_record(), None)
            .await
            .unwrap();
        assert_eq!(outcome, EmailDispatch::Skipped);
        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn bill_email_sent_with_summary_body() {
        let mailer = Arc::new(RecordingMailer::default());
        let svc = service(mailer.clone());
        let tenant = sample_tenant(Some("aziz@example.com"), true);

        let outcome = svc
            .send_bill(&tenant, "Yunusobod - 101", &sample_record(), None)
            .await
            .unwrap();
        assert!(outcome.was_sent());

        let sent = mailer.sent.lock().unwrap();
        let (to, subject, body) = &sent[0];
        assert_eq!(to, "aziz@example.com");
        assert_eq!(subject, "Bill for Yunusobod - 101 - 2026-08");
        assert!(body.contains("Units: 100 -> 150"));
        assert!(body.contains("Electricity: 750.00 UZS"));
        assert!(body.contains("Total: 5950.00 UZS"));
    }

    #[tokio::test]
    async fn custom_message_replaces_summary() {
        let mailer = Arc::new(RecordingMailer::default());
        let svc = service(mailer.clone());
        let tenant = sample_tenant(Some("aziz@example.com"), true);

        svc.send_bill(&tenant, "101", &sample_record(), Some("pay up"))
            .await
            .unwrap();
        assert_eq!(mailer.sent.lock().unwrap()[0].2, "pay up");
    }

    #[tokio::test]
    async fn delivery_failure_is_reported_not_swallowed() {
        let mailer = Arc::new(RecordingMailer {
            fail: true,
            ..Default::default()
        });
        let svc = service(mailer);
        let tenant = sample_tenant(Some("aziz@example.com"), true);

        let err = svc
            .send_bill(&tenant, "101", &sample_record(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::EmailDelivery(_)));
    }

    #[test]
    fn pending_summary_lists_every_bill() {
        let svc = service(Arc::new(RecordingMailer::default()));
        let tenant = sample_tenant(Some("aziz@example.com"), true);
        let mut second = sample_record();
        second.billing_month = "2026-07".to_string();

        let body = svc.pending_bills_summary(&tenant, "101", &[sample_record(), second]);
        assert!(body.contains("Billing month: 2026-08"));
        assert!(body.contains("Billing month: 2026-07"));
        assert!(body.contains("Status: Unpaid"));
    }
}
