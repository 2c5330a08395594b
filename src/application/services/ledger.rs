//! Ledger service for payment receipts and aggregate position

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::info;

use crate::domain::{
    DomainError, DomainResult, LedgerPosition, PaymentReceipt, PaymentStatus, RepositoryProvider,
};

use super::access::owned_tenant;

/// Service for recording payments and reading the tenant ledger.
///
/// Every write delegates to the receipt repository, which restamps all
/// of the tenant's receipts inside one transaction.
pub struct LedgerService {
    repos: Arc<dyn RepositoryProvider>,
}

impl LedgerService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn record_payment(
        &self,
        owner_id: &str,
        tenant_id: i32,
        amount: Decimal,
        received_on: NaiveDate,
        remark: Option<String>,
    ) -> DomainResult<(PaymentReceipt, LedgerPosition)> {
        if amount <= Decimal::ZERO {
            return Err(DomainError::Validation(
                "Payment amount must be greater than zero.".to_string(),
            ));
        }
        let (tenant, _room, _house) = owned_tenant(&self.repos, owner_id, tenant_id).await?;

        let receipt = PaymentReceipt {
            id: 0,
            tenant_id: tenant.id,
            amount: amount.round_dp(2),
            received_on,
            remark,
            status: PaymentStatus::Unpaid,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };

        let (stored, position) = self.repos.receipts().save(receipt).await?;
        info!(
            tenant_id,
            amount = %stored.amount,
            status = position.status.as_str(),
            "Payment recorded"
        );
        Ok((stored, position))
    }

    pub async fn update_payment(
        &self,
        owner_id: &str,
        receipt_id: i32,
        amount: Option<Decimal>,
        received_on: Option<NaiveDate>,
        remark: Option<Option<String>>,
    ) -> DomainResult<(PaymentReceipt, LedgerPosition)> {
        let existing = self.get_receipt(owner_id, receipt_id).await?;

        let mut receipt = existing;
        if let Some(amount) = amount {
            if amount <= Decimal::ZERO {
                return Err(DomainError::Validation(
                    "Payment amount must be greater than zero.".to_string(),
                ));
            }
            receipt.amount = amount.round_dp(2);
        }
        if let Some(received_on) = received_on {
            receipt.received_on = received_on;
        }
        if let Some(remark) = remark {
            receipt.remark = remark;
        }

        self.repos.receipts().update(receipt).await
    }

    pub async fn delete_payment(
        &self,
        owner_id: &str,
        receipt_id: i32,
    ) -> DomainResult<LedgerPosition> {
        let receipt = self.get_receipt(owner_id, receipt_id).await?;
        self.repos.receipts().delete(receipt.id).await
    }

    pub async fn get_receipt(
        &self,
        owner_id: &str,
        receipt_id: i32,
    ) -> DomainResult<PaymentReceipt> {
        let receipt = self
            .repos
            .receipts()
            .find_by_id(receipt_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "PaymentReceipt",
                field: "id",
                value: receipt_id.to_string(),
            })?;
        owned_tenant(&self.repos, owner_id, receipt.tenant_id)
            .await
            .map_err(|_| DomainError::NotFound {
                entity: "PaymentReceipt",
                field: "id",
                value: receipt_id.to_string(),
            })?;
        Ok(receipt)
    }

    pub async fn list_for_tenant(
        &self,
        owner_id: &str,
        tenant_id: i32,
    ) -> DomainResult<Vec<PaymentReceipt>> {
        owned_tenant(&self.repos, owner_id, tenant_id).await?;
        self.repos.receipts().find_for_tenant(tenant_id).await
    }

    pub async fn position(&self, owner_id: &str, tenant_id: i32) -> DomainResult<LedgerPosition> {
        owned_tenant(&self.repos, owner_id, tenant_id).await?;
        self.repos.receipts().ledger_position(tenant_id).await
    }
}
