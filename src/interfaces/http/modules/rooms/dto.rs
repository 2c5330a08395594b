//! Room DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Room;
use crate::interfaces::http::modules::billing::BillingRecordResponse;
use crate::interfaces::http::modules::tenants::TenantResponse;

#[derive(Debug, Serialize, ToSchema)]
pub struct RoomResponse {
    pub id: i32,
    pub house_id: i32,
    pub room_number: String,
    pub room_name: Option<String>,
    pub is_occupied: bool,
}

impl From<Room> for RoomResponse {
    fn from(r: Room) -> Self {
        Self {
            id: r.id,
            house_id: r.house_id,
            room_number: r.room_number,
            room_name: r.room_name,
            is_occupied: r.is_occupied,
        }
    }
}

/// Room detail: tenant, latest bill and outstanding bills in one view
#[derive(Debug, Serialize, ToSchema)]
pub struct RoomDetailResponse {
    pub room: RoomResponse,
    pub house_name: String,
    pub tenant: Option<TenantResponse>,
    pub latest_bill: Option<BillingRecordResponse>,
    pub outstanding_bills: Vec<BillingRecordResponse>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRoomRequest {
    #[validate(length(min = 1, max = 10, message = "Room number is required."))]
    pub room_number: String,
    #[validate(length(max = 100))]
    pub room_name: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateRoomRequest {
    #[validate(length(min = 1, max = 10, message = "Room number is required."))]
    pub room_number: Option<String>,
    /// Empty string clears the label
    pub room_name: Option<String>,
}
