//! Session token minting and verification.
//!
//! Tokens are compact HS256 JWTs (`header.payload.signature`, base64url)
//! carrying [`Claims`]. Issuer and verifier are the same process, so a single
//! shared secret is enough.
//!
//! Expiry is checked here rather than by `jsonwebtoken`: a token is expired
//! once `now >= exp`, with no leeway. The `*_at` variants take the clock as an
//! argument so the outcome is deterministic for a given instant.
//!
//! # Example
//!
//! ```ignore
//! let codec = TokenCodec::new(&jwt_config);
//! let token = codec.issue(&identity, chrono::Duration::hours(2))?;
//! let claims = codec.verify(&token)?;
//! assert_eq!(claims.identity(), identity);
//! ```

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;

use shepherd_config::JwtConfig;

use crate::claims::{Claims, Identity};

/// Why a token was rejected or could not be produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token signature does not match")]
    InvalidSignature,

    #[error("token has expired")]
    Expired,

    #[error("token is malformed")]
    Malformed,

    #[error("token lifetime must be positive")]
    InvalidTtl,

    #[error("failed to encode token: {0}")]
    Encoding(String),
}

pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    session_ttl: Duration,
}

impl TokenCodec {
    pub fn new(config: &JwtConfig) -> Self {
        Self::from_secret(config.secret.as_bytes(), Duration::seconds(config.session_ttl))
    }

    pub fn from_secret(secret: &[u8], session_ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            session_ttl,
        }
    }

    /// Lifetime used by [`TokenCodec::issue_session`] and the auth cookie.
    pub fn session_ttl(&self) -> Duration {
        self.session_ttl
    }

    /// Mints a token for `identity` valid for the configured session lifetime.
    pub fn issue_session(&self, identity: &Identity) -> Result<String, TokenError> {
        self.issue(identity, self.session_ttl)
    }

    pub fn issue(&self, identity: &Identity, ttl: Duration) -> Result<String, TokenError> {
        self.issue_at(identity, ttl, Utc::now())
    }

    /// Mints a token with `iat = now` and `exp = now + ttl`.
    ///
    /// # Errors
    ///
    /// [`TokenError::InvalidTtl`] when `ttl` is shorter than one second.
    pub fn issue_at(
        &self,
        identity: &Identity,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let ttl_secs = ttl.num_seconds();
        if ttl_secs <= 0 {
            return Err(TokenError::InvalidTtl);
        }

        let iat = now.timestamp();
        let claims = Claims {
            sub: identity.id.clone(),
            email: identity.email.clone(),
            role: identity.role,
            iat,
            exp: iat.saturating_add(ttl_secs),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Encoding(e.to_string()))
    }

    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// Checks the signature, decodes the claims and rejects them if `now`
    /// has reached `exp`.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                let kind = classify(e.kind());
                tracing::debug!(reason = ?e.kind(), "Session token rejected by decoder");
                kind
            })?;

        if now.timestamp() >= claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

fn classify(kind: &ErrorKind) -> TokenError {
    match kind {
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Malformed,
    }
}
