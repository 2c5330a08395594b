//! House DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::HouseOverview;
use crate::domain::House;

#[derive(Debug, Serialize, ToSchema)]
pub struct HouseResponse {
    pub id: i32,
    pub name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<House> for HouseResponse {
    fn from(h: House) -> Self {
        Self {
            id: h.id,
            name: h.name,
            is_active: h.is_active,
            created_at: h.created_at,
            updated_at: h.updated_at,
        }
    }
}

/// House plus room occupancy counts
#[derive(Debug, Serialize, ToSchema)]
pub struct HouseOverviewResponse {
    pub id: i32,
    pub name: String,
    pub is_active: bool,
    pub rooms_count: usize,
    pub occupied_count: usize,
    pub vacant_count: usize,
}

impl From<HouseOverview> for HouseOverviewResponse {
    fn from(o: HouseOverview) -> Self {
        Self {
            id: o.house.id,
            name: o.house.name,
            is_active: o.house.is_active,
            rooms_count: o.rooms_count,
            occupied_count: o.occupied_count,
            vacant_count: o.vacant_count,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateHouseRequest {
    #[validate(length(min = 1, max = 100, message = "House name is required."))]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateHouseRequest {
    #[validate(length(min = 1, max = 100, message = "House name is required."))]
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ToggleHouseResponse {
    pub is_active: bool,
}
