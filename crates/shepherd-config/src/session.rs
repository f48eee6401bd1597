//! Auth cookie attributes and rejection policy.
//!
//! # Environment Variables
//!
//! - `AUTH_COOKIE_NAME`: cookie carrying the session token (default: `auth_token`)
//! - `APP_ENV`: `production` turns the `Secure` cookie flag on (default: `development`)
//! - `AUTH_FORBIDDEN_STATUS`: `401` or `403`, status for valid sessions with a
//!   disallowed role (default: `401`)

use std::env;

use crate::error::ConfigError;

pub const DEFAULT_COOKIE_NAME: &str = "auth_token";

/// HTTP status used when a caller is authenticated but their role is not allowed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ForbiddenStatus {
    /// Answer 401, indistinguishable from a missing session.
    #[default]
    Unauthorized,
    /// Answer 403.
    Forbidden,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub secure_cookie: bool,
    pub forbidden_status: ForbiddenStatus,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            secure_cookie: false,
            forbidden_status: ForbiddenStatus::default(),
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|key| env::var(key).ok())
    }

    pub fn from_source<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cookie_name = lookup("AUTH_COOKIE_NAME")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_COOKIE_NAME.to_string());

        let secure_cookie = lookup("APP_ENV")
            .map(|s| s.trim().eq_ignore_ascii_case("production"))
            .unwrap_or(false);

        let forbidden_status = match lookup("AUTH_FORBIDDEN_STATUS").as_deref().map(str::trim) {
            None | Some("401") => ForbiddenStatus::Unauthorized,
            Some("403") => ForbiddenStatus::Forbidden,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "AUTH_FORBIDDEN_STATUS",
                    value: other.to_string(),
                    reason: "expected 401 or 403",
                });
            }
        };

        Ok(Self {
            cookie_name,
            secure_cookie,
            forbidden_status,
        })
    }
}
