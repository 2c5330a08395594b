//! Tenant domain entity

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::domain::billing::PricingSnapshot;

/// The occupant of exactly one room, carrying the pricing used for that
/// room's bills and a running initial meter reading.
///
/// Pricing fields are mutable at any time; changing them does not
/// retroactively alter already-issued bills.
#[derive(Debug, Clone)]
pub struct Tenant {
    pub id: i32,
    pub room_id: i32,
    pub name: String,
    pub contact: String,
    pub email: Option<String>,
    pub email_verified: bool,
    pub move_in_date: NaiveDate,
    pub rent_price: Decimal,
    pub electricity_price_per_unit: Decimal,
    pub water_price: Decimal,
    pub waste_price: Decimal,
    /// Meter reading at move-in; seeds `previous_units` for the room's
    /// first billing record.
    pub initial_unit: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tenant {
    /// Snapshot of the current pricing for charge calculation.
    pub fn pricing(&self) -> PricingSnapshot {
        PricingSnapshot {
            electricity_price_per_unit: self.electricity_price_per_unit,
            water_price: self.water_price,
            rent_price: self.rent_price,
            waste_price: self.waste_price,
        }
    }

    /// Whether bill emails may be sent to this tenant.
    pub fn can_receive_email(&self) -> bool {
        self.email.is_some() && self.email_verified
    }
}
