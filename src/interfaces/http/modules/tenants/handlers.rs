//! Tenant REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use rust_decimal_macros::dec;
use tracing::warn;

use super::dto::{
    AssignTenantRequest, TenantResponse, TenantWithRoomResponse, UpdateTenantRequest,
    VerificationOutcomeResponse,
};
use crate::application::{NewTenant, NotificationService, TenantService, TenantUpdate};
use crate::interfaces::http::common::{error_response, ApiResponse, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;

/// Tenant handler state
#[derive(Clone)]
pub struct TenantHandlerState {
    pub tenants: Arc<TenantService>,
    pub notifications: Arc<NotificationService>,
}

type HandlerError = (StatusCode, Json<ApiResponse<()>>);

/// Attempt delivery-based verification: send the test mail and record
/// the outcome on the tenant. Never fails the surrounding request.
async fn try_verify_by_test_email(
    state: &TenantHandlerState,
    owner_id: &str,
    tenant_id: i32,
    room_label: &str,
) -> bool {
    let Ok((tenant, _room, _house)) = state.tenants.get(owner_id, tenant_id).await else {
        return false;
    };
    if tenant.email.is_none() {
        return false;
    }

    let delivered = match state.notifications.send_tenant_test(&tenant, room_label).await {
        Ok(()) => true,
        Err(e) => {
            warn!(tenant_id, "Tenant test email failed: {}", e);
            false
        }
    };

    if let Err(e) = state
        .tenants
        .mark_email_verified(owner_id, tenant_id, delivered)
        .await
    {
        warn!(tenant_id, "Failed to store verification outcome: {}", e);
    }
    delivered
}

#[utoipa::path(
    post,
    path = "/api/v1/rooms/{room_id}/tenant",
    tag = "Tenants",
    security(("bearer_auth" = [])),
    params(("room_id" = i32, Path, description = "Room ID")),
    request_body = AssignTenantRequest,
    responses(
        (status = 201, description = "Tenant assigned", body = ApiResponse<TenantResponse>),
        (status = 409, description = "Room already has a tenant")
    )
)]
pub async fn assign_tenant(
    State(state): State<TenantHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(room_id): Path<i32>,
    ValidatedJson(req): ValidatedJson<AssignTenantRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TenantResponse>>), HandlerError> {
    let input = NewTenant {
        room_id,
        name: req.name,
        contact: req.contact,
        email: req.email.filter(|e| !e.is_empty()),
        move_in_date: req.move_in_date,
        rent_price: req.rent_price.unwrap_or(dec!(0.00)),
        electricity_price_per_unit: req.electricity_price_per_unit.unwrap_or(dec!(15.00)),
        water_price: req.water_price.unwrap_or(dec!(200.00)),
        waste_price: req.waste_price.unwrap_or(dec!(0.00)),
        initial_unit: req.initial_unit.unwrap_or(0),
    };

    let saved = state
        .tenants
        .assign(&auth.user_id, input)
        .await
        .map_err(error_response)?;

    // new address: verify delivery right away, like the assignment flow
    // in the dashboard does
    if saved.email.is_some() {
        let (_, room, house) = state
            .tenants
            .get(&auth.user_id, saved.id)
            .await
            .map_err(error_response)?;
        let label = format!("{} - {}", house.name, room.room_number);
        try_verify_by_test_email(&state, &auth.user_id, saved.id, &label).await;
    }

    let (tenant, _room, _house) = state
        .tenants
        .get(&auth.user_id, saved.id)
        .await
        .map_err(error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(tenant.into())),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/tenants/{tenant_id}",
    tag = "Tenants",
    security(("bearer_auth" = [])),
    params(("tenant_id" = i32, Path, description = "Tenant ID")),
    responses(
        (status = 200, description = "Tenant details", body = ApiResponse<TenantWithRoomResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_tenant(
    State(state): State<TenantHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<TenantWithRoomResponse>>, HandlerError> {
    let (tenant, room, house) = state
        .tenants
        .get(&auth.user_id, id)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(TenantWithRoomResponse {
        tenant: tenant.into(),
        room_label: format!("{} - {}", house.name, room.room_number),
    })))
}

#[utoipa::path(
    put,
    path = "/api/v1/tenants/{tenant_id}",
    tag = "Tenants",
    security(("bearer_auth" = [])),
    params(("tenant_id" = i32, Path, description = "Tenant ID")),
    request_body = UpdateTenantRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<TenantResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_tenant(
    State(state): State<TenantHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<UpdateTenantRequest>,
) -> Result<Json<ApiResponse<TenantResponse>>, HandlerError> {
    let update = TenantUpdate {
        name: req.name,
        contact: req.contact,
        email: req.email.map(|e| {
            let e = e.trim().to_string();
            if e.is_empty() {
                None
            } else {
                Some(e)
            }
        }),
        move_in_date: req.move_in_date,
        rent_price: req.rent_price,
        electricity_price_per_unit: req.electricity_price_per_unit,
        water_price: req.water_price,
        waste_price: req.waste_price,
        initial_unit: req.initial_unit,
    };

    let (tenant, email_changed) = state
        .tenants
        .update(&auth.user_id, id, update)
        .await
        .map_err(error_response)?;

    if email_changed && tenant.email.is_some() {
        let (_, room, house) = state
            .tenants
            .get(&auth.user_id, id)
            .await
            .map_err(error_response)?;
        let label = format!("{} - {}", house.name, room.room_number);
        try_verify_by_test_email(&state, &auth.user_id, id, &label).await;
    }

    let (tenant, _room, _house) = state
        .tenants
        .get(&auth.user_id, id)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(tenant.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/tenants/{tenant_id}/send-verification",
    tag = "Tenants",
    security(("bearer_auth" = [])),
    params(("tenant_id" = i32, Path, description = "Tenant ID")),
    responses(
        (status = 200, description = "Verification attempted", body = ApiResponse<VerificationOutcomeResponse>),
        (status = 400, description = "Tenant has no email address")
    )
)]
pub async fn send_verification(
    State(state): State<TenantHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<VerificationOutcomeResponse>>, HandlerError> {
    let (tenant, room, house) = state
        .tenants
        .get(&auth.user_id, id)
        .await
        .map_err(error_response)?;

    if tenant.email.is_none() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("Tenant has no email address")),
        ));
    }

    let label = format!("{} - {}", house.name, room.room_number);
    let verified = try_verify_by_test_email(&state, &auth.user_id, id, &label).await;

    let message = if verified {
        "Test email sent. Tenant email marked as verified."
    } else {
        "Unable to send test email to tenant."
    };

    Ok(Json(ApiResponse::success(VerificationOutcomeResponse {
        email_verified: verified,
        message: message.to_string(),
    })))
}

#[utoipa::path(
    delete,
    path = "/api/v1/tenants/{tenant_id}",
    tag = "Tenants",
    security(("bearer_auth" = [])),
    params(("tenant_id" = i32, Path, description = "Tenant ID")),
    responses(
        (status = 200, description = "Tenant removed; room vacated"),
        (status = 404, description = "Not found")
    )
)]
pub async fn remove_tenant(
    State(state): State<TenantHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<String>>, HandlerError> {
    state
        .tenants
        .remove(&auth.user_id, id)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(
        "Tenant removed and room vacated".to_string(),
    )))
}
