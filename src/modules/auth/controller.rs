use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use rekap_core::AppError;
use rekap_models::{
    AccessTokenResponse, AuthResponse, LoginRequest, RefreshTokenRequest, RegisterRequest,
};
use tracing::instrument;

use super::service::AuthService;
use crate::docs::ErrorResponse;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Register a new account and receive a token pair
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = AuthResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let response = AuthService::register(state.users.as_ref(), &state.tokens, dto).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Login with email and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Invalid email or password", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let response = AuthService::login(state.users.as_ref(), &state.tokens, dto).await?;
    Ok(Json(response))
}

/// Exchange a refresh token for a new access token
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    request_body = RefreshTokenRequest,
    responses(
        (status = 200, description = "New access token", body = AccessTokenResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Token is invalid or expired", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn refresh(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RefreshTokenRequest>,
) -> Result<Json<AccessTokenResponse>, AppError> {
    let response = AuthService::refresh(&state.tokens, dto)?;
    Ok(Json(response))
}
