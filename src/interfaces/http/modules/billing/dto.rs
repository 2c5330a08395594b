//! Billing record DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{BillingRecord, ChargeBreakdown};

#[derive(Debug, Serialize, ToSchema)]
pub struct BillingRecordResponse {
    pub id: i32,
    pub room_id: i32,
    pub billing_month: String,
    pub previous_units: i64,
    pub current_units: i64,
    pub electricity: Decimal,
    pub water: Decimal,
    pub rent: Decimal,
    pub waste: Decimal,
    pub total: Decimal,
    pub total_paid: Decimal,
    pub payment_received_date: Option<String>,
    pub remarks: Option<String>,
    /// Derived label; never writable through the API
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BillingRecord> for BillingRecordResponse {
    fn from(b: BillingRecord) -> Self {
        Self {
            id: b.id,
            room_id: b.room_id,
            billing_month: b.billing_month,
            previous_units: b.previous_units,
            current_units: b.current_units,
            electricity: b.electricity,
            water: b.water,
            rent: b.rent,
            waste: b.waste,
            total: b.total,
            total_paid: b.total_paid,
            payment_received_date: b.payment_received_date,
            remarks: b.remarks,
            status: b.status.to_string(),
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBillingRecordRequest {
    /// Defaults to the current "YYYY-MM" period
    pub billing_month: Option<String>,
    pub current_units: i64,
    pub total_paid: Option<Decimal>,
    pub payment_received_date: Option<String>,
    pub remarks: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateBillingRecordResponse {
    pub record: BillingRecordResponse,
    /// What happened to the bill email for this record
    pub email_result: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBillingRecordRequest {
    pub billing_month: Option<String>,
    /// Editing the meter reading recomputes every charge
    pub current_units: Option<i64>,
    pub total_paid: Option<Decimal>,
    pub payment_received_date: Option<String>,
    pub remarks: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PreviewChargesRequest {
    pub current_units: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PreviewChargesResponse {
    pub previous_units: i64,
    pub electricity: Decimal,
    pub water: Decimal,
    pub rent: Decimal,
    pub waste: Decimal,
    pub total: Decimal,
}

impl PreviewChargesResponse {
    pub fn new(previous_units: i64, breakdown: ChargeBreakdown) -> Self {
        Self {
            previous_units,
            electricity: breakdown.electricity,
            water: breakdown.water,
            rent: breakdown.rent,
            waste: breakdown.waste,
            total: breakdown.total,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SendBillEmailRequest {
    /// Replaces the generated summary when present
    pub custom_message: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EmailResultResponse {
    pub sent: bool,
    pub message: String,
}

/// Status filter for billing record listings
#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct BillingRecordFilter {
    /// "Unpaid" | "Partially Paid" | "Paid"
    pub status: Option<String>,
}
