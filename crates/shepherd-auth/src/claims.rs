//! Session token payload.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::role::Role;

/// The signed-in principal: what a token is issued for, and what a guard
/// hands back once the token checks out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Identity {
    /// User id (string form of the database id)
    pub id: String,
    pub email: String,
    pub role: Role,
}

impl Identity {
    pub fn new(id: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            role,
        }
    }
}

/// JWT claims for session tokens.
///
/// Unknown fields are ignored when decoding. A missing or mistyped `sub`,
/// `email` or `role`, or a role outside [`Role`], fails deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User id (subject claim)
    pub sub: String,
    pub email: String,
    pub role: Role,
    /// Issued-at (Unix timestamp, seconds)
    pub iat: i64,
    /// Expiration (Unix timestamp, seconds)
    pub exp: i64,
}

impl Claims {
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.sub.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }

    pub fn into_identity(self) -> Identity {
        Identity {
            id: self.sub,
            email: self.email,
            role: self.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_serialize() {
        let claims = Claims {
            sub: "u1".to_string(),
            email: "a@b.com".to_string(),
            role: Role::Bishop,
            iat: 1_700_000_000,
            exp: 1_700_007_200,
        };
        let serialized = serde_json::to_string(&claims).unwrap();
        assert!(serialized.contains(r#""sub":"u1""#));
        assert!(serialized.contains(r#""role":"bishop""#));
        assert!(serialized.contains(r#""exp":1700007200"#));
    }

    #[test]
    fn test_claims_ignore_extra_fields() {
        let json = r#"{"sub":"u2","email":"m@c.org","role":"member","iat":1,"exp":2,"name":"Ada"}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.identity(), Identity::new("u2", "m@c.org", Role::Member));
    }

    #[test]
    fn test_claims_reject_unknown_role() {
        let json = r#"{"sub":"u2","email":"m@c.org","role":"deacon","iat":1,"exp":2}"#;
        assert!(serde_json::from_str::<Claims>(json).is_err());
    }

    #[test]
    fn test_claims_reject_wrong_type() {
        let json = r#"{"sub":42,"email":"m@c.org","role":"member","iat":1,"exp":2}"#;
        assert!(serde_json::from_str::<Claims>(json).is_err());
    }

    #[test]
    fn test_into_identity() {
        let claims = Claims {
            sub: "u3".to_string(),
            email: "p@c.org".to_string(),
            role: Role::Protocol,
            iat: 0,
            exp: 10,
        };
        let identity = claims.clone().into_identity();
        assert_eq!(identity, claims.identity());
        assert_eq!(identity.role, Role::Protocol);
    }
}
