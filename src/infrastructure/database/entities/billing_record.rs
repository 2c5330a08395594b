//! Billing record entity

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Billing record model - one per room per billing period.
///
/// Charge columns are computed at creation from the tenant's pricing at
/// that moment; later pricing edits never rewrite them. The status label
/// is always derived, never accepted from a caller.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "billing_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub room_id: i32,

    /// Billing period as "YYYY-MM"
    pub billing_month: String,

    /// Meter reading carried over from the previous record
    pub previous_units: i64,

    /// Meter reading for this period; must exceed `previous_units`
    pub current_units: i64,

    /// (current - previous) * tenant's unit price at creation time
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub electricity: Decimal,

    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub water: Decimal,

    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub rent: Decimal,

    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub waste: Decimal,

    /// electricity + water + rent + waste
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub total: Decimal,

    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub total_paid: Decimal,

    /// Free-text summary of payments received against this bill
    pub payment_received_date: Option<String>,

    pub remarks: Option<String>,

    /// "Unpaid" | "Partially Paid" | "Paid"
    pub status: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
