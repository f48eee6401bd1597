//! Role matrix: which roles may enter which protected area.
//!
//! [`Access`] is the only place the mapping from an area to its roles is
//! written down. The edge route gate ([`RouteTable`]) and per-route guards
//! both resolve an `Access` and ask it for the allowed roles, so the two
//! checks cannot disagree.

use serde::Serialize;
use utoipa::ToSchema;

use crate::role::Role;

/// A protected area of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Access {
    /// Bishopric administration.
    Bishop,
    /// Group and event management.
    Leadership,
    /// Ushering, visitor reception and attendance.
    Protocol,
    /// Member-only areas such as the directory and prayer requests.
    Membership,
    /// Any signed-in user.
    Authenticated,
}

impl Access {
    pub const ALL: [Access; 5] = [
        Access::Bishop,
        Access::Leadership,
        Access::Protocol,
        Access::Membership,
        Access::Authenticated,
    ];

    pub fn allowed_roles(self) -> &'static [Role] {
        match self {
            Access::Bishop => &[Role::Bishop],
            Access::Leadership => &[Role::Bishop, Role::Leader],
            Access::Protocol => &[Role::Bishop, Role::Protocol],
            Access::Membership => &[Role::Bishop, Role::Leader, Role::Member, Role::Protocol],
            Access::Authenticated => &Role::ALL,
        }
    }

    pub fn permits(self, role: Role) -> bool {
        self.allowed_roles().contains(&role)
    }

    /// Every area `role` may enter, in [`Access::ALL`] order.
    pub fn areas_for(role: Role) -> Vec<Access> {
        Access::ALL
            .into_iter()
            .filter(|access| access.permits(role))
            .collect()
    }
}

/// Static table from URL path prefixes to the area they belong to.
///
/// Prefixes match whole path segments: `/api/bishop` covers `/api/bishop`
/// and `/api/bishop/groups` but not `/api/bishopric`. When several prefixes
/// match, the longest wins. Unmatched paths are public.
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<(String, Access)>,
}

impl RouteTable {
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn with(mut self, prefix: &str, access: Access) -> Self {
        let prefix = prefix.trim_end_matches('/');
        let prefix = if prefix.is_empty() { "/" } else { prefix };
        self.entries.push((prefix.to_string(), access));
        self
    }

    pub fn lookup(&self, path: &str) -> Option<Access> {
        self.entries
            .iter()
            .filter(|(prefix, _)| covers(prefix, path))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, access)| *access)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        RouteTable::empty()
            .with("/api/bishop", Access::Bishop)
            .with("/api/leader", Access::Leadership)
            .with("/api/protocol", Access::Protocol)
            .with("/api/members", Access::Membership)
            .with("/api/session", Access::Authenticated)
            .with("/api/dashboard", Access::Authenticated)
    }
}

fn covers(prefix: &str, path: &str) -> bool {
    if prefix == "/" {
        return true;
    }
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
