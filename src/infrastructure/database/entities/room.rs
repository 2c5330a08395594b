//! Room entity

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Room model - a rentable unit inside a house
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rooms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub house_id: i32,

    /// Display number (e.g. "101", "A1", "Suite 1")
    pub room_number: String,

    /// Optional label (e.g. "Master Bedroom")
    pub room_name: Option<String>,

    /// Toggled when a tenant is assigned/removed
    pub is_occupied: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
