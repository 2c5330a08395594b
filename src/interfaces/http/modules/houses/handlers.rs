//! House REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{
    CreateHouseRequest, HouseOverviewResponse, HouseResponse, ToggleHouseResponse,
    UpdateHouseRequest,
};
use crate::application::PropertyService;
use crate::interfaces::http::common::{error_response, ApiResponse, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;

/// House handler state
#[derive(Clone)]
pub struct HouseHandlerState {
    pub property: Arc<PropertyService>,
}

type HandlerError = (StatusCode, Json<ApiResponse<()>>);

#[utoipa::path(
    get,
    path = "/api/v1/houses",
    tag = "Houses",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Houses with occupancy counts", body = ApiResponse<Vec<HouseOverviewResponse>>)
    )
)]
pub async fn list_houses(
    State(state): State<HouseHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<Vec<HouseOverviewResponse>>>, HandlerError> {
    let overviews = state
        .property
        .list_houses(&auth.user_id)
        .await
        .map_err(error_response)?;
    let responses: Vec<HouseOverviewResponse> = overviews.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(responses)))
}

#[utoipa::path(
    post,
    path = "/api/v1/houses",
    tag = "Houses",
    security(("bearer_auth" = [])),
    request_body = CreateHouseRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<HouseResponse>),
        (status = 400, description = "Invalid data")
    )
)]
pub async fn create_house(
    State(state): State<HouseHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
    ValidatedJson(req): ValidatedJson<CreateHouseRequest>,
) -> Result<(StatusCode, Json<ApiResponse<HouseResponse>>), HandlerError> {
    let house = state
        .property
        .create_house(&auth.user_id, &req.name)
        .await
        .map_err(error_response)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(house.into())),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/houses/{house_id}",
    tag = "Houses",
    security(("bearer_auth" = [])),
    params(("house_id" = i32, Path, description = "House ID")),
    responses(
        (status = 200, description = "House details", body = ApiResponse<HouseResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_house(
    State(state): State<HouseHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<HouseResponse>>, HandlerError> {
    let house = state
        .property
        .get_house(&auth.user_id, id)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(house.into())))
}

#[utoipa::path(
    put,
    path = "/api/v1/houses/{house_id}",
    tag = "Houses",
    security(("bearer_auth" = [])),
    params(("house_id" = i32, Path, description = "House ID")),
    request_body = UpdateHouseRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<HouseResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_house(
    State(state): State<HouseHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<UpdateHouseRequest>,
) -> Result<Json<ApiResponse<HouseResponse>>, HandlerError> {
    let house = state
        .property
        .rename_house(&auth.user_id, id, &req.name)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(house.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/houses/{house_id}/toggle-status",
    tag = "Houses",
    security(("bearer_auth" = [])),
    params(("house_id" = i32, Path, description = "House ID")),
    responses(
        (status = 200, description = "Status flipped", body = ApiResponse<ToggleHouseResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn toggle_house_status(
    State(state): State<HouseHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ToggleHouseResponse>>, HandlerError> {
    let is_active = state
        .property
        .toggle_house_status(&auth.user_id, id)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(ToggleHouseResponse { is_active })))
}

#[utoipa::path(
    delete,
    path = "/api/v1/houses/{house_id}",
    tag = "Houses",
    security(("bearer_auth" = [])),
    params(("house_id" = i32, Path, description = "House ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_house(
    State(state): State<HouseHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<String>>, HandlerError> {
    state
        .property
        .delete_house(&auth.user_id, id)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success("House deleted".to_string())))
}
