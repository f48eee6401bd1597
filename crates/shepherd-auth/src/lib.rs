//! # Shepherd Auth
//!
//! Stateless cookie sessions and role-based access control.
//!
//! - [`role`]: the closed set of congregation roles
//! - [`claims`]: the identity carried by a session token
//! - [`jwt`]: [`TokenCodec`], which mints and verifies HS256 session tokens
//! - [`matrix`]: the role matrix ([`Access`]) and the path-prefix [`RouteTable`]
//! - [`guard`]: [`AccessGuard`], the per-request cookie → token → role check
//!
//! # Flow
//!
//! ```text
//! Cookie: auth_token=<jwt>
//!     → AccessGuard::authorize
//!         → TokenCodec::verify     (signature, expiry, claim shape)
//!         → role ∈ allowed roles?  (Forbidden otherwise)
//!     → Identity { id, email, role }
//! ```
//!
//! Codec failures are collapsed into [`AuthError::Unauthenticated`] by the
//! guard; the specific [`TokenError`] kind only shows up in logs.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use shepherd_auth::{AccessGuard, Access, Identity, Role, TokenCodec};
//!
//! let codec = Arc::new(TokenCodec::new(&jwt_config));
//! let token = codec.issue_session(&Identity::new("u1", "a@b.com", Role::Leader))?;
//!
//! let guard = AccessGuard::new(codec, "auth_token");
//! let identity = guard.authorize(&headers, Access::Leadership.allowed_roles())?;
//! ```

pub mod claims;
pub mod guard;
pub mod jwt;
pub mod matrix;
pub mod role;

pub use claims::{Claims, Identity};
pub use guard::{AccessGuard, AuthError, extract_cookie};
pub use jwt::{TokenCodec, TokenError};
pub use matrix::{Access, RouteTable};
pub use role::{Role, UnknownRole};
