//! Auth handlers — register, verify/resend OTP, login, refresh, me.

use axum::Json;
use axum::extract::State;

use crate::error::ApiError;
use carebridge_entity::account::{Account, AccountRole, UpdateAccount};
use carebridge_service::auth::RegisterRequest as ServiceRegisterRequest;

use crate::dto::request::{
    LoginRequest, RefreshRequest, RegisterRequest, ResendOtpRequest, UpdateAccountRequest,
    VerifyOtpRequest,
};
use crate::dto::response::{ApiResponse, MessageResponse, TokenResponse};
use crate::dto::validate_dto;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    validate_dto(&req)?;

    let role: AccountRole = req.role.parse()?;

    state
        .auth_service
        .register(ServiceRegisterRequest {
            email: req.email,
            password: req.password,
            role,
        })
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Registered. Check your email for the verification code.",
    ))))
}

/// POST /api/auth/verify-otp
pub async fn verify_otp(
    State(state): State<AppState>,
    Json(req): Json<VerifyOtpRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    validate_dto(&req)?;

    state.auth_service.verify_otp(&req.email, &req.code).await?;

    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Account verified. You can now log in.",
    ))))
}

/// POST /api/auth/resend-otp
pub async fn resend_otp(
    State(state): State<AppState>,
    Json(req): Json<ResendOtpRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    validate_dto(&req)?;

    state.auth_service.resend_otp(&req.email).await?;

    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "A new verification code has been sent.",
    ))))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<TokenResponse>>, ApiError> {
    validate_dto(&req)?;

    let pair = state.auth_service.login(&req.email, &req.password).await?;

    Ok(Json(ApiResponse::ok(TokenResponse {
        access_token: pair.access_token,
        refresh_token: pair.refresh_token,
        access_expires_at: pair.access_expires_at,
        refresh_expires_at: pair.refresh_expires_at,
    })))
}

/// POST /api/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<ApiResponse<TokenResponse>>, ApiError> {
    let pair = state.auth_service.refresh(&req.refresh_token).await?;

    Ok(Json(ApiResponse::ok(TokenResponse {
        access_token: pair.access_token,
        refresh_token: pair.refresh_token,
        access_expires_at: pair.access_expires_at,
        refresh_expires_at: pair.refresh_expires_at,
    })))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Account>>, ApiError> {
    let account = state.auth_service.get_account(auth.context()).await?;
    Ok(Json(ApiResponse::ok(account)))
}

/// PUT /api/auth/me
pub async fn update_me(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateAccountRequest>,
) -> Result<Json<ApiResponse<Account>>, ApiError> {
    let account = state
        .auth_service
        .update_account(
            auth.context(),
            UpdateAccount {
                id: auth.account_id,
                first_name: req.first_name,
                last_name: req.last_name,
                phone: req.phone,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(account)))
}
