//! Role gating for Axum routers.
//!
//! Two entry points share one implementation:
//!
//! 1. [`route_gate`]: edge middleware driven by the application's
//!    [`RouteTable`](shepherd_auth::RouteTable)
//! 2. [`gated`] / [`require_access`]: a layer bound to one [`Access`]
//!
//! Both call [`authorize_request`], and every rejection is shaped by
//! [`reject`], which applies the configured forbidden-status policy.

use axum::{
    Router,
    extract::{Request, State},
    http::HeaderMap,
    middleware::{self, Next},
    response::Response,
};
use shepherd_auth::{Access, AuthError, Identity};
use shepherd_config::ForbiddenStatus;
use shepherd_core::AppError;

use crate::state::AppState;

/// Turns a guard failure into the response the caller sees.
///
/// No token text or verification detail is included.
pub fn reject(err: AuthError, policy: ForbiddenStatus) -> AppError {
    match err {
        AuthError::Unauthenticated => AppError::unauthorized("Authentication required"),
        AuthError::Forbidden { .. } => match policy {
            ForbiddenStatus::Unauthorized => AppError::unauthorized("Access denied"),
            ForbiddenStatus::Forbidden => AppError::forbidden("Access denied"),
        },
    }
}

/// Authorizes the request headers for `access`.
pub fn authorize_request(
    state: &AppState,
    headers: &HeaderMap,
    access: Access,
) -> Result<Identity, AppError> {
    state
        .guard
        .authorize(headers, access.allowed_roles())
        .map_err(|err| reject(err, state.session_config.forbidden_status))
}

/// Edge gate: requests whose path falls under a table prefix must carry a
/// session allowed for that area. Other paths pass through untouched.
pub async fn route_gate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(access) = state.route_table.lookup(req.uri().path()) {
        let identity = authorize_request(&state, req.headers(), access)?;
        tracing::debug!(
            user_id = %identity.id,
            role = %identity.role,
            access = ?access,
            "Route gate passed"
        );
        req.extensions_mut().insert(identity);
    }

    Ok(next.run(req).await)
}

/// State for [`require_access`]: the app state plus the area being guarded.
#[derive(Clone)]
pub struct Gate {
    state: AppState,
    access: Access,
}

impl Gate {
    pub fn new(state: AppState, access: Access) -> Self {
        Self { state, access }
    }
}

/// Per-route gate. Reuses an identity stored by [`route_gate`] when its role
/// already qualifies, and authorizes the cookie otherwise.
pub async fn require_access(
    State(gate): State<Gate>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let admitted = req
        .extensions()
        .get::<Identity>()
        .is_some_and(|identity| gate.access.permits(identity.role));

    if !admitted {
        let identity = authorize_request(&gate.state, req.headers(), gate.access)?;
        req.extensions_mut().insert(identity);
    }

    Ok(next.run(req).await)
}

/// Wraps every route of `router` with [`require_access`] for `access`.
///
/// # Example
///
/// ```rust,ignore
/// let api = Router::new()
///     .nest("/session", gated(init_session_router(), &state, Access::Authenticated));
/// ```
pub fn gated(router: Router<AppState>, state: &AppState, access: Access) -> Router<AppState> {
    router.route_layer(middleware::from_fn_with_state(
        Gate::new(state.clone(), access),
        require_access,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use shepherd_auth::Role;

    #[test]
    fn test_unauthenticated_is_401() {
        for policy in [ForbiddenStatus::Unauthorized, ForbiddenStatus::Forbidden] {
            let err = reject(AuthError::Unauthenticated, policy);
            assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn test_forbidden_follows_policy() {
        let forbidden = AuthError::Forbidden { role: Role::Member };
        assert_eq!(
            reject(forbidden.clone(), ForbiddenStatus::Unauthorized).status,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            reject(forbidden, ForbiddenStatus::Forbidden).status,
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn test_forbidden_message_does_not_name_role() {
        let err = reject(AuthError::Forbidden { role: Role::Visitor }, ForbiddenStatus::Forbidden);
        assert_eq!(err.error.to_string(), "Access denied");
    }
}
