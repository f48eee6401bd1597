//! Session token signing configuration.
//!
//! # Environment Variables
//!
//! - `JWT_SECRET` (required): HMAC secret shared by issuer and verifier
//! - `JWT_SESSION_TTL`: session lifetime in seconds (default: 7200, two hours)

use std::env;

use crate::error::ConfigError;

pub const DEFAULT_SESSION_TTL_SECS: i64 = 7200;

#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub session_ttl: i64,
}

impl JwtConfig {
    /// Loads the config from the process environment.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Missing`] when `JWT_SECRET` is unset or blank, and
    /// [`ConfigError::Invalid`] when `JWT_SESSION_TTL` is not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|key| env::var(key).ok())
    }

    pub fn from_source<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("JWT_SECRET")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let session_ttl = match lookup("JWT_SESSION_TTL") {
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(ttl) if ttl > 0 => ttl,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "JWT_SESSION_TTL",
                        value: raw,
                        reason: "expected a positive number of seconds",
                    });
                }
            },
            None => DEFAULT_SESSION_TTL_SECS,
        };

        Ok(Self {
            secret,
            session_ttl,
        })
    }
}

// The secret must never end up in logs.
impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("session_ttl", &self.session_ttl)
            .finish()
    }
}
