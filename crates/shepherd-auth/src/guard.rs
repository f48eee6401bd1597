//! Per-request access guard.
//!
//! `NoToken → Unauthenticated`; `TokenPresent → verify`, where every codec
//! failure also ends in `Unauthenticated`; `Valid → role check →
//! Authorized | Forbidden`. Nothing is stored between requests.

use std::sync::Arc;

use axum::http::{HeaderMap, header};
use cookie::Cookie;
use thiserror::Error;

use crate::claims::Identity;
use crate::jwt::TokenCodec;
use crate::role::Role;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No session cookie, or the token in it failed verification.
    #[error("authentication required")]
    Unauthenticated,

    /// The session is valid but its role is not in the allowed set.
    #[error("role {role} is not permitted here")]
    Forbidden { role: Role },
}

#[derive(Clone)]
pub struct AccessGuard {
    codec: Arc<TokenCodec>,
    cookie_name: String,
}

impl AccessGuard {
    pub fn new(codec: Arc<TokenCodec>, cookie_name: impl Into<String>) -> Self {
        Self {
            codec,
            cookie_name: cookie_name.into(),
        }
    }

    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Authenticates the request from its session cookie and checks the
    /// caller's role against `allowed`.
    pub fn authorize(&self, headers: &HeaderMap, allowed: &[Role]) -> Result<Identity, AuthError> {
        let Some(token) = extract_cookie(headers, &self.cookie_name) else {
            tracing::debug!(cookie = %self.cookie_name, "No session cookie on request");
            return Err(AuthError::Unauthenticated);
        };

        self.authorize_token(&token, allowed)
    }

    pub fn authorize_token(&self, token: &str, allowed: &[Role]) -> Result<Identity, AuthError> {
        tracing::debug!(allowed = ?allowed, "Verifying session token");

        let claims = self.codec.verify(token).map_err(|reason| {
            tracing::warn!(%reason, "Session token rejected");
            AuthError::Unauthenticated
        })?;

        if !allowed.contains(&claims.role) {
            tracing::warn!(
                user_id = %claims.sub,
                role = %claims.role,
                allowed = ?allowed,
                "Role not permitted"
            );
            return Err(AuthError::Forbidden { role: claims.role });
        }

        tracing::debug!(user_id = %claims.sub, role = %claims.role, "Session authorized");
        Ok(claims.into_identity())
    }
}

/// Returns the value of cookie `name`, searching every `Cookie` header.
///
/// An empty value (what logout leaves behind) counts as absent.
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|raw| raw.split(';'))
        .filter_map(|pair| Cookie::parse(pair.trim()).ok())
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}
