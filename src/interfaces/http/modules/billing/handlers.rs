//! Billing record REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use tracing::warn;

use super::dto::{
    BillingRecordFilter, BillingRecordResponse, CreateBillingRecordRequest,
    CreateBillingRecordResponse, EmailResultResponse, PreviewChargesRequest,
    PreviewChargesResponse, SendBillEmailRequest, UpdateBillingRecordRequest,
};
use crate::application::{
    BillingRecordUpdate, BillingService, EmailDispatch, NewBillingRecord, NotificationService,
};
use crate::interfaces::http::common::{
    error_response, ApiResponse, PaginatedResponse, PaginationParams, ValidatedJson,
};
use crate::interfaces::http::middleware::AuthenticatedUser;

/// Billing handler state
#[derive(Clone)]
pub struct BillingHandlerState {
    pub billing: Arc<BillingService>,
    pub notifications: Arc<NotificationService>,
}

type HandlerError = (StatusCode, Json<ApiResponse<()>>);

const EMAIL_SENT: &str = "Bill email sent to tenant.";
const EMAIL_SKIPPED: &str = "Tenant email is missing or unverified; no email sent.";
const EMAIL_FAILED: &str = "Bill saved, but sending email failed.";

#[utoipa::path(
    get,
    path = "/api/v1/rooms/{room_id}/billing-records",
    tag = "Billing",
    security(("bearer_auth" = [])),
    params(
        ("room_id" = i32, Path, description = "Room ID"),
        BillingRecordFilter,
        PaginationParams
    ),
    responses(
        (status = 200, description = "Billing records, newest first", body = PaginatedResponse<BillingRecordResponse>)
    )
)]
pub async fn list_billing_records(
    State(state): State<BillingHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(room_id): Path<i32>,
    Query(filter): Query<BillingRecordFilter>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<PaginatedResponse<BillingRecordResponse>>, HandlerError> {
    let records = state
        .billing
        .list_for_room(&auth.user_id, room_id)
        .await
        .map_err(error_response)?;

    let filtered: Vec<_> = records
        .into_iter()
        .filter(|r| match &filter.status {
            Some(status) => status.eq_ignore_ascii_case(r.status.as_str()),
            None => true,
        })
        .collect();

    let total = filtered.len() as u64;
    let page = pagination.page.max(1);
    let limit = pagination.limit.clamp(1, 100);
    let start = ((page - 1) * limit) as usize;
    let items: Vec<BillingRecordResponse> = filtered
        .into_iter()
        .skip(start)
        .take(limit as usize)
        .map(Into::into)
        .collect();

    Ok(Json(PaginatedResponse::new(items, total, page, limit)))
}

#[utoipa::path(
    post,
    path = "/api/v1/rooms/{room_id}/billing-records",
    tag = "Billing",
    security(("bearer_auth" = [])),
    params(("room_id" = i32, Path, description = "Room ID")),
    request_body = CreateBillingRecordRequest,
    responses(
        (status = 201, description = "Bill created; email outcome reported", body = ApiResponse<CreateBillingRecordResponse>),
        (status = 400, description = "Meter reading not above the previous one")
    )
)]
pub async fn create_billing_record(
    State(state): State<BillingHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(room_id): Path<i32>,
    ValidatedJson(req): ValidatedJson<CreateBillingRecordRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CreateBillingRecordResponse>>), HandlerError> {
    let record = state
        .billing
        .create_record(
            &auth.user_id,
            NewBillingRecord {
                room_id,
                billing_month: req.billing_month,
                current_units: req.current_units,
                total_paid: req.total_paid,
                payment_received_date: req.payment_received_date,
                remarks: req.remarks,
            },
        )
        .await
        .map_err(error_response)?;

    // bill email is best-effort; the record is already persisted
    let email_result = match state.billing.email_context(&auth.user_id, room_id).await {
        Ok((tenant, label)) => {
            match state
                .notifications
                .send_bill(&tenant, &label, &record, None)
                .await
            {
                Ok(EmailDispatch::Sent) => EMAIL_SENT,
                Ok(EmailDispatch::Skipped) => EMAIL_SKIPPED,
                Err(e) => {
                    warn!(record_id = record.id, "Bill email failed: {}", e);
                    EMAIL_FAILED
                }
            }
        }
        Err(_) => EMAIL_SKIPPED,
    };

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(CreateBillingRecordResponse {
            record: record.into(),
            email_result: email_result.to_string(),
        })),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/billing-records/{record_id}",
    tag = "Billing",
    security(("bearer_auth" = [])),
    params(("record_id" = i32, Path, description = "Billing record ID")),
    responses(
        (status = 200, description = "Billing record", body = ApiResponse<BillingRecordResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_billing_record(
    State(state): State<BillingHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<BillingRecordResponse>>, HandlerError> {
    let record = state
        .billing
        .get_record(&auth.user_id, id)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(record.into())))
}

#[utoipa::path(
    put,
    path = "/api/v1/billing-records/{record_id}",
    tag = "Billing",
    security(("bearer_auth" = [])),
    params(("record_id" = i32, Path, description = "Billing record ID")),
    request_body = UpdateBillingRecordRequest,
    responses(
        (status = 200, description = "Updated; charges recomputed when the meter changed", body = ApiResponse<BillingRecordResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_billing_record(
    State(state): State<BillingHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<UpdateBillingRecordRequest>,
) -> Result<Json<ApiResponse<BillingRecordResponse>>, HandlerError> {
    let record = state
        .billing
        .update_record(
            &auth.user_id,
            id,
            BillingRecordUpdate {
                billing_month: req.billing_month,
                current_units: req.current_units,
                total_paid: req.total_paid,
                payment_received_date: req.payment_received_date.map(|v| {
                    let v = v.trim().to_string();
                    if v.is_empty() {
                        None
                    } else {
                        Some(v)
                    }
                }),
                remarks: req.remarks.map(|v| {
                    let v = v.trim().to_string();
                    if v.is_empty() {
                        None
                    } else {
                        Some(v)
                    }
                }),
            },
        )
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(record.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/billing-records/{record_id}",
    tag = "Billing",
    security(("bearer_auth" = [])),
    params(("record_id" = i32, Path, description = "Billing record ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_billing_record(
    State(state): State<BillingHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<String>>, HandlerError> {
    state
        .billing
        .delete_record(&auth.user_id, id)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(
        "Billing record deleted".to_string(),
    )))
}

#[utoipa::path(
    post,
    path = "/api/v1/rooms/{room_id}/billing-records/preview",
    tag = "Billing",
    security(("bearer_auth" = [])),
    params(("room_id" = i32, Path, description = "Room ID")),
    request_body = PreviewChargesRequest,
    responses(
        (status = 200, description = "Charges that a bill with this reading would carry", body = ApiResponse<PreviewChargesResponse>),
        (status = 400, description = "Meter reading not above the previous one")
    )
)]
pub async fn preview_charges(
    State(state): State<BillingHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(room_id): Path<i32>,
    ValidatedJson(req): ValidatedJson<PreviewChargesRequest>,
) -> Result<Json<ApiResponse<PreviewChargesResponse>>, HandlerError> {
    let (previous_units, breakdown) = state
        .billing
        .preview_charges(&auth.user_id, room_id, req.current_units)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(PreviewChargesResponse::new(
        previous_units,
        breakdown,
    ))))
}

#[utoipa::path(
    post,
    path = "/api/v1/billing-records/{record_id}/send-email",
    tag = "Billing",
    security(("bearer_auth" = [])),
    params(("record_id" = i32, Path, description = "Billing record ID")),
    request_body = SendBillEmailRequest,
    responses(
        (status = 200, description = "Email outcome", body = ApiResponse<EmailResultResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn send_bill_email(
    State(state): State<BillingHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<SendBillEmailRequest>,
) -> Result<Json<ApiResponse<EmailResultResponse>>, HandlerError> {
    let record = state
        .billing
        .get_record(&auth.user_id, id)
        .await
        .map_err(error_response)?;
    let (tenant, label) = state
        .billing
        .email_context(&auth.user_id, record.room_id)
        .await
        .map_err(error_response)?;

    let custom = req
        .custom_message
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty());

    let (sent, message) = match state
        .notifications
        .send_bill(&tenant, &label, &record, custom)
        .await
    {
        Ok(EmailDispatch::Sent) => (true, EMAIL_SENT),
        Ok(EmailDispatch::Skipped) => (false, EMAIL_SKIPPED),
        Err(e) => {
            warn!(record_id = id, "Bill email failed: {}", e);
            (false, EMAIL_FAILED)
        }
    };

    Ok(Json(ApiResponse::success(EmailResultResponse {
        sent,
        message: message.to_string(),
    })))
}

#[utoipa::path(
    post,
    path = "/api/v1/rooms/{room_id}/send-pending-email",
    tag = "Billing",
    security(("bearer_auth" = [])),
    params(("room_id" = i32, Path, description = "Room ID")),
    request_body = SendBillEmailRequest,
    responses(
        (status = 200, description = "Email outcome", body = ApiResponse<EmailResultResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn send_pending_bills_email(
    State(state): State<BillingHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(room_id): Path<i32>,
    ValidatedJson(req): ValidatedJson<SendBillEmailRequest>,
) -> Result<Json<ApiResponse<EmailResultResponse>>, HandlerError> {
    let pending = state
        .billing
        .outstanding_for_room(&auth.user_id, room_id)
        .await
        .map_err(error_response)?;

    if pending.is_empty() {
        return Ok(Json(ApiResponse::success(EmailResultResponse {
            sent: false,
            message: "No pending bills found.".to_string(),
        })));
    }

    let (tenant, label) = state
        .billing
        .email_context(&auth.user_id, room_id)
        .await
        .map_err(error_response)?;

    let custom = req
        .custom_message
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty());

    let (sent, message) = match state
        .notifications
        .send_pending_bills(&tenant, &label, &pending, custom)
        .await
    {
        Ok(EmailDispatch::Sent) => (true, "Pending bills email sent to tenant."),
        Ok(EmailDispatch::Skipped) => (false, EMAIL_SKIPPED),
        Err(e) => {
            warn!(room_id, "Pending bills email failed: {}", e);
            (false, "Sending pending bills email failed.")
        }
    };

    Ok(Json(ApiResponse::success(EmailResultResponse {
        sent,
        message: message.to_string(),
    })))
}
