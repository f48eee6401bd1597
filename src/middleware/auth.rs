use axum::{extract::FromRequestParts, http::request::Parts};
use shepherd_auth::{Access, Identity, Role};
use shepherd_core::AppError;
use uuid::Uuid;

use crate::middleware::role::authorize_request;
use crate::state::AppState;

/// Extractor for the signed-in user.
///
/// Uses the identity a gate already stored on the request; on ungated routes
/// it authorizes the session cookie itself, accepting any role.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Identity);

impl AuthUser {
    pub fn id(&self) -> &str {
        &self.0.id
    }

    pub fn email(&self) -> &str {
        &self.0.email
    }

    pub fn role(&self) -> Role {
        self.0.role
    }

    pub fn can_access(&self, access: Access) -> bool {
        access.permits(self.0.role)
    }

    /// The subject as a database id.
    pub fn user_id(&self) -> Result<Uuid, AppError> {
        Uuid::parse_str(&self.0.id)
            .map_err(|_| AppError::unauthorized("Invalid user ID in token"))
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<Identity>() {
            return Ok(AuthUser(identity.clone()));
        }

        let identity = authorize_request(state, &parts.headers, Access::Authenticated)?;
        Ok(AuthUser(identity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth_user(id: &str, role: Role) -> AuthUser {
        AuthUser(Identity::new(id, "test@example.com", role))
    }

    #[test]
    fn test_accessors() {
        let user = auth_user("u1", Role::Leader);
        assert_eq!(user.id(), "u1");
        assert_eq!(user.email(), "test@example.com");
        assert_eq!(user.role(), Role::Leader);
    }

    #[test]
    fn test_can_access() {
        let user = auth_user("u1", Role::Member);
        assert!(user.can_access(Access::Membership));
        assert!(user.can_access(Access::Authenticated));
        assert!(!user.can_access(Access::Leadership));
        assert!(!user.can_access(Access::Bishop));
    }

    #[test]
    fn test_user_id() {
        let id = Uuid::new_v4();
        assert_eq!(auth_user(&id.to_string(), Role::Bishop).user_id().unwrap(), id);
        assert!(auth_user("not-a-uuid", Role::Bishop).user_id().is_err());
    }
}
