use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use tracing::instrument;

use super::cookies::{cleared_cookie, session_cookie};
use super::model::{ErrorResponse, LoginRequest, LoginResponse};
use super::service::AuthService;
use crate::state::AppState;
use crate::validator::ValidatedJson;
use shepherd_core::AppError;

/// Login and receive the session cookie
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful; `auth_token` cookie set", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Response, AppError> {
    let (user, token) = AuthService::login_user(&state.db, dto, state.codec()).await?;
    let max_age = state.codec().session_ttl().num_seconds();
    let cookie = session_cookie(&state.session_config, &token, max_age)?;

    Ok(([(header::SET_COOKIE, cookie)], Json(LoginResponse { user })).into_response())
}

/// Clear the session cookie
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 204, description = "Session cookie cleared")
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn logout_user(State(state): State<AppState>) -> Result<Response, AppError> {
    let cookie = cleared_cookie(&state.session_config)?;
    Ok((StatusCode::NO_CONTENT, [(header::SET_COOKIE, cookie)]).into_response())
}
