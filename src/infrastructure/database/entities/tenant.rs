//! Tenant entity

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Tenant model - occupant of exactly one room, with per-unit pricing
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tenants")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// One tenant per room (unique index)
    pub room_id: i32,

    pub name: String,

    /// Phone number
    pub contact: String,

    pub email: Option<String>,

    /// Set when a test email was delivered; reset on email change
    pub email_verified: bool,

    pub move_in_date: NaiveDate,

    /// Monthly rent
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub rent_price: Decimal,

    /// Price per consumed electricity unit
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub electricity_price_per_unit: Decimal,

    /// Flat monthly water charge
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub water_price: Decimal,

    /// Flat monthly waste charge
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub waste_price: Decimal,

    /// Meter reading at move-in; seeds the room's first billing record
    pub initial_unit: i64,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
