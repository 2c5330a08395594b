//! Payment receipt repository interface

use async_trait::async_trait;

use super::model::{LedgerPosition, PaymentReceipt};
use crate::domain::DomainResult;

/// Receipt persistence plus the transactional ledger restamp.
///
/// Every write recomputes the tenant's [`LedgerPosition`] and overwrites
/// the status on all of the tenant's receipts inside one database
/// transaction, so concurrent writes for the same tenant cannot produce
/// inconsistent stamps.
#[async_trait]
pub trait PaymentReceiptRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<PaymentReceipt>>;

    /// All receipts for a tenant, newest first.
    async fn find_for_tenant(&self, tenant_id: i32) -> DomainResult<Vec<PaymentReceipt>>;

    /// Insert a receipt and restamp the tenant's ledger. Returns the
    /// stored receipt (with the freshly derived status) and the position.
    async fn save(&self, receipt: PaymentReceipt)
        -> DomainResult<(PaymentReceipt, LedgerPosition)>;

    /// Update amount/date/remark of a receipt and restamp the ledger.
    async fn update(
        &self,
        receipt: PaymentReceipt,
    ) -> DomainResult<(PaymentReceipt, LedgerPosition)>;

    /// Delete a receipt and restamp the remaining ones.
    async fn delete(&self, id: i32) -> DomainResult<LedgerPosition>;

    /// Current aggregate position without writing anything.
    async fn ledger_position(&self, tenant_id: i32) -> DomainResult<LedgerPosition>;
}
