//! Payment receipt REST API handlers
//!
//! Every write triggers the ledger restamp; the response always carries
//! the freshly derived aggregate position.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{
    LedgerPositionResponse, PaymentReceiptResponse, ReceiptWithLedgerResponse,
    RecordPaymentRequest, UpdatePaymentRequest,
};
use crate::application::LedgerService;
use crate::interfaces::http::common::{error_response, ApiResponse, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;

/// Receipt handler state
#[derive(Clone)]
pub struct ReceiptHandlerState {
    pub ledger: Arc<LedgerService>,
}

type HandlerError = (StatusCode, Json<ApiResponse<()>>);

#[utoipa::path(
    get,
    path = "/api/v1/tenants/{tenant_id}/receipts",
    tag = "Receipts",
    security(("bearer_auth" = [])),
    params(("tenant_id" = i32, Path, description = "Tenant ID")),
    responses(
        (status = 200, description = "Receipts, newest first", body = ApiResponse<Vec<PaymentReceiptResponse>>),
        (status = 404, description = "Tenant not found")
    )
)]
pub async fn list_receipts(
    State(state): State<ReceiptHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(tenant_id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<PaymentReceiptResponse>>>, HandlerError> {
    let receipts = state
        .ledger
        .list_for_tenant(&auth.user_id, tenant_id)
        .await
        .map_err(error_response)?;
    let responses: Vec<PaymentReceiptResponse> = receipts.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(responses)))
}

#[utoipa::path(
    post,
    path = "/api/v1/tenants/{tenant_id}/receipts",
    tag = "Receipts",
    security(("bearer_auth" = [])),
    params(("tenant_id" = i32, Path, description = "Tenant ID")),
    request_body = RecordPaymentRequest,
    responses(
        (status = 201, description = "Payment recorded; ledger restamped", body = ApiResponse<ReceiptWithLedgerResponse>),
        (status = 400, description = "Non-positive amount")
    )
)]
pub async fn record_payment(
    State(state): State<ReceiptHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(tenant_id): Path<i32>,
    ValidatedJson(req): ValidatedJson<RecordPaymentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ReceiptWithLedgerResponse>>), HandlerError> {
    let (receipt, position) = state
        .ledger
        .record_payment(
            &auth.user_id,
            tenant_id,
            req.amount,
            req.received_on,
            req.remark.filter(|r| !r.trim().is_empty()),
        )
        .await
        .map_err(error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(ReceiptWithLedgerResponse {
            receipt: receipt.into(),
            ledger: position.into(),
        })),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/receipts/{receipt_id}",
    tag = "Receipts",
    security(("bearer_auth" = [])),
    params(("receipt_id" = i32, Path, description = "Receipt ID")),
    request_body = UpdatePaymentRequest,
    responses(
        (status = 200, description = "Updated; ledger restamped", body = ApiResponse<ReceiptWithLedgerResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_payment(
    State(state): State<ReceiptHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<UpdatePaymentRequest>,
) -> Result<Json<ApiResponse<ReceiptWithLedgerResponse>>, HandlerError> {
    let remark = req.remark.map(|r| {
        let r = r.trim().to_string();
        if r.is_empty() {
            None
        } else {
            Some(r)
        }
    });

    let (receipt, position) = state
        .ledger
        .update_payment(&auth.user_id, id, req.amount, req.received_on, remark)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(ReceiptWithLedgerResponse {
        receipt: receipt.into(),
        ledger: position.into(),
    })))
}

#[utoipa::path(
    delete,
    path = "/api/v1/receipts/{receipt_id}",
    tag = "Receipts",
    security(("bearer_auth" = [])),
    params(("receipt_id" = i32, Path, description = "Receipt ID")),
    responses(
        (status = 200, description = "Deleted; ledger restamped", body = ApiResponse<LedgerPositionResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_payment(
    State(state): State<ReceiptHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<LedgerPositionResponse>>, HandlerError> {
    let position = state
        .ledger
        .delete_payment(&auth.user_id, id)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(position.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/tenants/{tenant_id}/ledger",
    tag = "Receipts",
    security(("bearer_auth" = [])),
    params(("tenant_id" = i32, Path, description = "Tenant ID")),
    responses(
        (status = 200, description = "Aggregate position", body = ApiResponse<LedgerPositionResponse>),
        (status = 404, description = "Tenant not found")
    )
)]
pub async fn get_ledger_position(
    State(state): State<ReceiptHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(tenant_id): Path<i32>,
) -> Result<Json<ApiResponse<LedgerPositionResponse>>, HandlerError> {
    let position = state
        .ledger
        .position(&auth.user_id, tenant_id)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(position.into())))
}
