use anyhow::Context;
use chrono::Duration;
use shepherd_auth::{Identity, Role, TokenCodec};
use shepherd_config::JwtConfig;

/// Signs a token for the given principal with `JWT_SECRET`.
///
/// `ttl_secs` falls back to the configured session lifetime.
pub fn issue_token(
    config: &JwtConfig,
    subject: &str,
    email: &str,
    role: Role,
    ttl_secs: Option<i64>,
) -> anyhow::Result<String> {
    let codec = TokenCodec::new(config);
    let ttl = ttl_secs.map(Duration::seconds).unwrap_or(codec.session_ttl());
    let identity = Identity::new(subject, email, role);

    codec
        .issue(&identity, ttl)
        .context("Failed to issue token")
}
