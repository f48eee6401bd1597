//! Authentication and authorization for HTTP requests.
//!
//! - [`auth`]: the [`auth::AuthUser`] extractor
//! - [`role`]: the edge [`role::route_gate`], the per-route
//!   [`role::require_access`] layer and the error mapping
//!
//! # Request Flow
//!
//! 1. Browser sends `Cookie: auth_token=<jwt>`
//! 2. `route_gate` looks the path up in the route table; gated paths are
//!    authorized and the [`shepherd_auth::Identity`] is stored in the request
//!    extensions
//! 3. `require_access` layers on individual routers re-check (reusing the
//!    stored identity when its role already qualifies)
//! 4. Handlers take [`auth::AuthUser`] to read the identity
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::role::gated;
//! use shepherd_auth::Access;
//!
//! let leaders = gated(init_groups_router(), &state, Access::Leadership);
//! ```

pub mod auth;
pub mod role;
