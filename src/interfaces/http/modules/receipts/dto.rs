//! Payment receipt DTOs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{LedgerPosition, PaymentReceipt};

#[derive(Debug, Serialize, ToSchema)]
pub struct PaymentReceiptResponse {
    pub id: i32,
    pub tenant_id: i32,
    pub amount: Decimal,
    pub received_on: NaiveDate,
    pub remark: Option<String>,
    /// Aggregate ledger status; identical on every receipt of a tenant
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PaymentReceipt> for PaymentReceiptResponse {
    fn from(r: PaymentReceipt) -> Self {
        Self {
            id: r.id,
            tenant_id: r.tenant_id,
            amount: r.amount,
            received_on: r.received_on,
            remark: r.remark,
            status: r.status.to_string(),
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LedgerPositionResponse {
    pub total_due: Decimal,
    pub total_received: Decimal,
    /// total_due - total_received; negative when overpaid
    pub balance: Decimal,
    pub status: String,
}

impl From<LedgerPosition> for LedgerPositionResponse {
    fn from(p: LedgerPosition) -> Self {
        Self {
            total_due: p.total_due,
            total_received: p.total_received,
            balance: p.balance(),
            status: p.status.to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReceiptWithLedgerResponse {
    pub receipt: PaymentReceiptResponse,
    pub ledger: LedgerPositionResponse,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RecordPaymentRequest {
    pub amount: Decimal,
    pub received_on: NaiveDate,
    pub remark: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePaymentRequest {
    pub amount: Option<Decimal>,
    pub received_on: Option<NaiveDate>,
    /// Empty string clears the remark
    pub remark: Option<String>,
}
