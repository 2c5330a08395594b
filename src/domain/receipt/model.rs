//! Payment receipt domain entity and ledger aggregation

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::domain::billing::{classify_aggregate, PaymentStatus};

/// One payment event for a tenant.
///
/// A receipt is not tied to a specific bill; its `status` reflects the
/// tenant's aggregate ledger position and is restamped on every receipt
/// of the tenant whenever any receipt is written.
#[derive(Debug, Clone)]
pub struct PaymentReceipt {
    pub id: i32,
    pub tenant_id: i32,
    pub amount: Decimal,
    pub received_on: NaiveDate,
    pub remark: Option<String>,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A tenant's aggregate ledger position: everything billed to the
/// tenant's room vs everything received from the tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerPosition {
    pub total_due: Decimal,
    pub total_received: Decimal,
    pub status: PaymentStatus,
}

impl LedgerPosition {
    /// Derive the position from the two sums. A tenant with bills but no
    /// receipts has `total_received = 0` and classifies as `Unpaid`.
    pub fn derive(total_due: Decimal, total_received: Decimal) -> Self {
        Self {
            total_due,
            total_received,
            status: classify_aggregate(total_due, total_received),
        }
    }

    /// Outstanding balance; negative when the tenant is overpaid.
    pub fn balance(&self) -> Decimal {
        self.total_due - self.total_received
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn derive_partial() {
        let pos = LedgerPosition::derive(dec!(5950.00), dec!(3000.00));
        assert_eq!(pos.status, PaymentStatus::PartiallyPaid);
        assert_eq!(pos.balance(), dec!(2950.00));
    }

    #[test]
    fn derive_overpaid() {
        let pos = LedgerPosition::derive(dec!(5950.00), dec!(6000.00));
        assert_eq!(pos.status, PaymentStatus::Overpaid);
        assert_eq!(pos.balance(), dec!(-50.00));
    }

    #[test]
    fn derive_no_receipts() {
        let pos = LedgerPosition::derive(dec!(5950.00), Decimal::ZERO);
        assert_eq!(pos.status, PaymentStatus::Unpaid);
        assert_eq!(pos.balance(), dec!(5950.00));
    }

    #[test]
    fn derive_is_deterministic() {
        // recomputing with unchanged sums must stamp the same status
        let a = LedgerPosition::derive(dec!(100.00), dec!(40.00));
        let b = LedgerPosition::derive(dec!(100.00), dec!(40.00));
        assert_eq!(a, b);
    }
}
