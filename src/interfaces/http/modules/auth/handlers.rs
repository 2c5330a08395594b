//! Authentication API handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::Utc;
use tracing::{info, warn};

use super::dto::{
    ChangePasswordRequest, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
    ResendVerificationRequest, UserInfo, VerifyEmailParams,
};
use crate::application::NotificationService;
use crate::domain::{DomainError, RepositoryProvider, User, UserRole};
use crate::infrastructure::crypto::jwt::{
    create_token, create_verification_token, verify_verification_token, JwtConfig,
};
use crate::infrastructure::crypto::password::{hash_password, verify_password};
use crate::interfaces::http::common::{error_response, ApiResponse, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;

/// Auth state
#[derive(Clone)]
pub struct AuthHandlerState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub jwt_config: JwtConfig,
    pub notifications: Arc<NotificationService>,
}

type HandlerError = (StatusCode, Json<ApiResponse<()>>);

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Successful login", body = ApiResponse<LoginResponse>),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, HandlerError> {
    let user = state
        .repos
        .users()
        .find_by_username_or_email(&request.username)
        .await
        .map_err(error_response)?;

    let Some(user) = user else {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::error("Invalid credentials")),
        ));
    };

    let password_valid = verify_password(&request.password, &user.password_hash).unwrap_or(false);
    if !password_valid {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::error("Invalid credentials")),
        ));
    }

    if !user.email_verified {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::error(
                "Email not verified. Check your inbox for the verification link.",
            )),
        ));
    }

    if !user.is_active {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::error("Account is disabled")),
        ));
    }

    let mut updated = user.clone();
    updated.last_login_at = Some(Utc::now());
    if let Err(e) = state.repos.users().update(updated).await {
        warn!("Failed to record last login: {}", e);
    }

    let role = user.role.as_str();
    let token = create_token(&user.id, &user.username, role, &state.jwt_config).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(e.to_string())),
        )
    })?;

    info!(username = %user.username, "User logged in");

    Ok(Json(ApiResponse::success(LoginResponse {
        token,
        token_type: "Bearer".to_string(),
        expires_in: state.jwt_config.expiration_hours * 3600,
        user: user.into(),
    })))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created; verification email dispatched", body = ApiResponse<RegisterResponse>),
        (status = 409, description = "Username or email already taken")
    )
)]
pub async fn register(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<RegisterResponse>>), HandlerError> {
    for identifier in [&request.username, &request.email] {
        let existing = state
            .repos
            .users()
            .find_by_username_or_email(identifier)
            .await
            .map_err(error_response)?;
        if existing.is_some() {
            return Err((
                StatusCode::CONFLICT,
                Json(ApiResponse::error("Username or email already registered")),
            ));
        }
    }

    let password_hash = hash_password(&request.password).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(e.to_string())),
        )
    })?;

    let now = Utc::now();
    let user = User {
        id: uuid::Uuid::new_v4().to_string(),
        username: request.username,
        email: request.email,
        password_hash,
        role: UserRole::Operator,
        // inactive until the emailed token is confirmed
        is_active: false,
        email_verified: false,
        created_at: now,
        updated_at: now,
        last_login_at: None,
    };

    let saved = state.repos.users().save(user).await.map_err(error_response)?;

    let verification_email_sent = match create_verification_token(
        &saved.id,
        &saved.email,
        &state.jwt_config,
    ) {
        Ok(token) => state
            .notifications
            .send_user_verification(&saved.email, &saved.username, &token)
            .await
            .map(|_| true)
            .unwrap_or_else(|e| {
                warn!(email = %saved.email, "Verification email failed: {}", e);
                false
            }),
        Err(e) => {
            warn!("Failed to create verification token: {}", e);
            false
        }
    };

    info!(username = %saved.username, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(RegisterResponse {
            user: saved.into(),
            verification_email_sent,
        })),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/verify-email",
    tag = "Authentication",
    params(VerifyEmailParams),
    responses(
        (status = 200, description = "Email verified; account activated"),
        (status = 400, description = "Invalid or expired token")
    )
)]
pub async fn verify_email(
    State(state): State<AuthHandlerState>,
    Query(params): Query<VerifyEmailParams>,
) -> Result<Json<ApiResponse<String>>, HandlerError> {
    let claims = verify_verification_token(&params.token, &state.jwt_config).map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("Invalid or expired verification token")),
        )
    })?;

    let user = state
        .repos
        .users()
        .find_by_id(&claims.sub)
        .await
        .map_err(error_response)?
        .ok_or_else(|| {
            error_response(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: claims.sub.clone(),
            })
        })?;

    // token issued for a previous address is useless after an email change
    if user.email != claims.email {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("Invalid or expired verification token")),
        ));
    }

    if user.email_verified {
        return Ok(Json(ApiResponse::success(
            "Email already verified".to_string(),
        )));
    }

    let mut verified = user;
    verified.email_verified = true;
    verified.is_active = true;
    state
        .repos
        .users()
        .update(verified.clone())
        .await
        .map_err(error_response)?;

    info!(username = %verified.username, "Email verified; account activated");

    Ok(Json(ApiResponse::success(
        "Email verified. You can now log in.".to_string(),
    )))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/resend-verification",
    tag = "Authentication",
    request_body = ResendVerificationRequest,
    responses(
        (status = 200, description = "If the address is registered and unverified, a new mail was sent")
    )
)]
pub async fn resend_verification(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<ResendVerificationRequest>,
) -> Result<Json<ApiResponse<String>>, HandlerError> {
    let user = state
        .repos
        .users()
        .find_by_username_or_email(&request.email)
        .await
        .map_err(error_response)?;

    if let Some(user) = user.filter(|u| !u.email_verified) {
        match create_verification_token(&user.id, &user.email, &state.jwt_config) {
            Ok(token) => {
                if let Err(e) = state
                    .notifications
                    .send_user_verification(&user.email, &user.username, &token)
                    .await
                {
                    warn!(email = %user.email, "Verification email failed: {}", e);
                }
            }
            Err(e) => warn!("Failed to create verification token: {}", e),
        }
    }

    // identical response whether or not the address exists
    Ok(Json(ApiResponse::success(
        "If that address is registered and unverified, a verification email was sent.".to_string(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = ApiResponse<UserInfo>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn get_current_user(
    State(state): State<AuthHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<UserInfo>>, HandlerError> {
    let user = state
        .repos
        .users()
        .find_by_id(&auth.user_id)
        .await
        .map_err(error_response)?
        .ok_or_else(|| {
            error_response(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: auth.user_id.clone(),
            })
        })?;

    Ok(Json(ApiResponse::success(user.into())))
}

#[utoipa::path(
    put,
    path = "/api/v1/auth/change-password",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed"),
        (status = 401, description = "Current password incorrect")
    )
)]
pub async fn change_password(
    State(state): State<AuthHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<ChangePasswordRequest>,
) -> Result<Json<ApiResponse<String>>, HandlerError> {
    let user = state
        .repos
        .users()
        .find_by_id(&auth.user_id)
        .await
        .map_err(error_response)?
        .ok_or_else(|| {
            error_response(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: auth.user_id.clone(),
            })
        })?;

    let valid = verify_password(&request.current_password, &user.password_hash).unwrap_or(false);
    if !valid {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::error("Current password is incorrect")),
        ));
    }

    let mut updated = user;
    updated.password_hash = hash_password(&request.new_password).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(e.to_string())),
        )
    })?;
    state
        .repos
        .users()
        .update(updated)
        .await
        .map_err(error_response)?;

    info!(username = %auth.username, "Password changed");

    Ok(Json(ApiResponse::success("Password changed".to_string())))
}
