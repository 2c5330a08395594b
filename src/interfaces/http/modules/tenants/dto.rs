//! Tenant DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Tenant;

#[derive(Debug, Serialize, ToSchema)]
pub struct TenantResponse {
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
    pub initial_unit: i64,
}

impl From<Tenant> for TenantResponse {
    fn from(t: Tenant) -> Self {
        Self {
            id: t.id,
            room_id: t.room_id,
            name: t.name,
            contact: t.contact,
            email: t.email,
            email_verified: t.email_verified,
            move_in_date: t.move_in_date,
            rent_price: t.rent_price,
            electricity_price_per_unit: t.electricity_price_per_unit,
            water_price: t.water_price,
            waste_price: t.waste_price,
            initial_unit: t.initial_unit,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AssignTenantRequest {
    #[validate(length(min = 1, max = 100, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, max = 15, message = "contact is required"))]
    pub contact: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    pub move_in_date: NaiveDate,
    /// Defaults mirror a typical letting: rent 0.00, electricity 15.00
    /// per unit, water 200.00, waste 0.00
    pub rent_price: Option<Decimal>,
    pub electricity_price_per_unit: Option<Decimal>,
    pub water_price: Option<Decimal>,
    pub waste_price: Option<Decimal>,
    pub initial_unit: Option<i64>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateTenantRequest {
    #[validate(length(min = 1, max = 100, message = "name is required"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 15, message = "contact is required"))]
    pub contact: Option<String>,
    /// Empty string clears the address; a new value resets verification
    pub email: Option<String>,
    pub move_in_date: Option<NaiveDate>,
    pub rent_price: Option<Decimal>,
    pub electricity_price_per_unit: Option<Decimal>,
    pub water_price: Option<Decimal>,
    pub waste_price: Option<Decimal>,
    pub initial_unit: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TenantWithRoomResponse {
    pub tenant: TenantResponse,
    /// "<house name> - <room number>"
    pub room_label: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VerificationOutcomeResponse {
    pub email_verified: bool,
    pub message: String,
}
