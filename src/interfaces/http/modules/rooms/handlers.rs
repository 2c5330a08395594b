//! Room REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{CreateRoomRequest, RoomDetailResponse, RoomResponse, UpdateRoomRequest};
use crate::application::{BillingService, PropertyService, TenantService};
use crate::interfaces::http::common::{error_response, ApiResponse, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;

/// Room handler state
#[derive(Clone)]
pub struct RoomHandlerState {
    pub property: Arc<PropertyService>,
    pub tenants: Arc<TenantService>,
    pub billing: Arc<BillingService>,
}

type HandlerError = (StatusCode, Json<ApiResponse<()>>);

#[utoipa::path(
    get,
    path = "/api/v1/houses/{house_id}/rooms",
    tag = "Rooms",
    security(("bearer_auth" = [])),
    params(("house_id" = i32, Path, description = "House ID")),
    responses(
        (status = 200, description = "Rooms ordered by number", body = ApiResponse<Vec<RoomResponse>>),
        (status = 404, description = "House not found")
    )
)]
pub async fn list_rooms(
    State(state): State<RoomHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(house_id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<RoomResponse>>>, HandlerError> {
    let rooms = state
        .property
        .list_rooms(&auth.user_id, house_id)
        .await
        .map_err(error_response)?;
    let responses: Vec<RoomResponse> = rooms.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(responses)))
}

#[utoipa::path(
    post,
    path = "/api/v1/houses/{house_id}/rooms",
    tag = "Rooms",
    security(("bearer_auth" = [])),
    params(("house_id" = i32, Path, description = "House ID")),
    request_body = CreateRoomRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<RoomResponse>),
        (status = 409, description = "Room number already taken in this house")
    )
)]
pub async fn create_room(
    State(state): State<RoomHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(house_id): Path<i32>,
    ValidatedJson(req): ValidatedJson<CreateRoomRequest>,
) -> Result<(StatusCode, Json<ApiResponse<RoomResponse>>), HandlerError> {
    let room = state
        .property
        .add_room(
            &auth.user_id,
            house_id,
            &req.room_number,
            req.room_name.filter(|n| !n.trim().is_empty()),
        )
        .await
        .map_err(error_response)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(room.into()))))
}

#[utoipa::path(
    get,
    path = "/api/v1/rooms/{room_id}",
    tag = "Rooms",
    security(("bearer_auth" = [])),
    params(("room_id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room detail with tenant and bills", body = ApiResponse<RoomDetailResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_room_detail(
    State(state): State<RoomHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<RoomDetailResponse>>, HandlerError> {
    let (room, house) = state
        .property
        .get_room(&auth.user_id, id)
        .await
        .map_err(error_response)?;

    let tenant = state
        .tenants
        .find_for_room(&auth.user_id, room.id)
        .await
        .map_err(error_response)?;

    let bills = state
        .billing
        .list_for_room(&auth.user_id, room.id)
        .await
        .map_err(error_response)?;
    let outstanding: Vec<_> = bills
        .iter()
        .filter(|b| b.is_outstanding())
        .cloned()
        .collect();
    let latest_bill = bills.into_iter().next();

    Ok(Json(ApiResponse::success(RoomDetailResponse {
        room: room.into(),
        house_name: house.name,
        tenant: tenant.map(Into::into),
        latest_bill: latest_bill.map(Into::into),
        outstanding_bills: outstanding.into_iter().map(Into::into).collect(),
    })))
}

#[utoipa::path(
    put,
    path = "/api/v1/rooms/{room_id}",
    tag = "Rooms",
    security(("bearer_auth" = [])),
    params(("room_id" = i32, Path, description = "Room ID")),
    request_body = UpdateRoomRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<RoomResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_room(
    State(state): State<RoomHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<UpdateRoomRequest>,
) -> Result<Json<ApiResponse<RoomResponse>>, HandlerError> {
    let room_name = req.room_name.map(|n| {
        let n = n.trim().to_string();
        if n.is_empty() {
            None
        } else {
            Some(n)
        }
    });

    let room = state
        .property
        .update_room(&auth.user_id, id, req.room_number, room_name)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(room.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/rooms/{room_id}",
    tag = "Rooms",
    security(("bearer_auth" = [])),
    params(("room_id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_room(
    State(state): State<RoomHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<String>>, HandlerError> {
    state
        .property
        .delete_room(&auth.user_id, id)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success("Room deleted".to_string())))
}
