//! Congregation roles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Role held by a signed-in user. Serialized in lowercase (`"bishop"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Bishop,
    Leader,
    Member,
    Visitor,
    Protocol,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Bishop,
        Role::Leader,
        Role::Member,
        Role::Visitor,
        Role::Protocol,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Bishop => "bishop",
            Role::Leader => "leader",
            Role::Member => "member",
            Role::Visitor => "visitor",
            Role::Protocol => "protocol",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_display() {
        for role in Role::ALL {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(
            "Bishop".parse::<Role>().unwrap_err(),
            UnknownRole("Bishop".to_string())
        );
        assert!("pastor".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Protocol).unwrap(), r#""protocol""#);
        let role: Role = serde_json::from_str(r#""visitor""#).unwrap();
        assert_eq!(role, Role::Visitor);
        assert!(serde_json::from_str::<Role>(r#""admin""#).is_err());
    }
}
