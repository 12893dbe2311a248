//! Authenticated caller and the roles endpoints are gated on.

use std::collections::HashSet;
use std::fmt;

/// Application role checked by endpoint guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Authority string a principal must hold to act in this role.
    pub fn authority(self) -> &'static str {
        match self {
            Role::Admin => "ROLE_ADMIN",
            Role::User => "ROLE_USER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => f.write_str("ADMIN"),
            Role::User => f.write_str("USER"),
        }
    }
}

/// The authenticated caller of a request.
///
/// `name` identifies the owner of user-scoped records. `authorities` is the
/// full set derived from the token claims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub name: String,
    pub authorities: HashSet<String>,
}

impl Principal {
    pub fn new(name: impl Into<String>, authorities: HashSet<String>) -> Self {
        Self {
            name: name.into(),
            authorities,
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.authorities.contains(role.authority())
    }

    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.iter().any(|role| self.has_role(*role))
    }
}
