//! Dashboard REST API handler

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Extension, Json};

use super::dto::DashboardResponse;
use crate::application::DashboardService;
use crate::interfaces::http::common::{error_response, ApiResponse};
use crate::interfaces::http::middleware::AuthenticatedUser;

/// Dashboard handler state
#[derive(Clone)]
pub struct DashboardHandlerState {
    pub dashboard: Arc<DashboardService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    tag = "Dashboard",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Landlord-wide aggregates", body = ApiResponse<DashboardResponse>)
    )
)]
pub async fn get_dashboard(
    State(state): State<DashboardHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<DashboardResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let summary = state
        .dashboard
        .summary(&auth.user_id)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(summary.into())))
}
