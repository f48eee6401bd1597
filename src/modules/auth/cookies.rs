//! `Set-Cookie` values for the session cookie.

use axum::http::HeaderValue;
use shepherd_config::SessionConfig;
use shepherd_core::AppError;

/// Cookie carrying a freshly issued session token.
pub fn session_cookie(
    config: &SessionConfig,
    token: &str,
    max_age_secs: i64,
) -> Result<HeaderValue, AppError> {
    build(config, token, max_age_secs)
}

/// Cookie that makes the browser drop the session.
pub fn cleared_cookie(config: &SessionConfig) -> Result<HeaderValue, AppError> {
    build(config, "", 0)
}

fn build(config: &SessionConfig, value: &str, max_age_secs: i64) -> Result<HeaderValue, AppError> {
    let secure = if config.secure_cookie { "; Secure" } else { "" };
    let raw = format!(
        "{}={}; HttpOnly; SameSite=Lax; Path=/; Max-Age={}{}",
        config.cookie_name, value, max_age_secs, secure
    );

    HeaderValue::from_str(&raw)
        .map_err(|e| AppError::internal_error(format!("Invalid Set-Cookie value: {}", e)))
}
