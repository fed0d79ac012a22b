//! Principal identity and role.

use crate::classification::domain::Department;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identifier of an authenticated principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrincipalId(Uuid);

impl PrincipalId {
    /// Creates a new random principal identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a principal identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for PrincipalId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PrincipalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Caller role; determines which tickets a principal may see and change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Role {
    /// Member of the public filing grievances.
    Citizen,
    /// Department staff handling routed tickets.
    Officer {
        /// Department whose queue the officer works.
        department: Department,
    },
    /// Oversight staff with access to every ticket.
    Administrator,
}

impl Role {
    /// Returns the canonical role name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Citizen => "citizen",
            Self::Officer { .. } => "officer",
            Self::Administrator => "administrator",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authenticated caller as vouched for by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    id: PrincipalId,
    display_name: String,
    role: Role,
}

impl Principal {
    /// Creates a principal.
    ///
    /// Blank display names are replaced with `Unknown User`.
    #[must_use]
    pub fn new(id: PrincipalId, display_name: impl Into<String>, role: Role) -> Self {
        let raw = display_name.into();
        let trimmed = raw.trim();
        let display_name = if trimmed.is_empty() {
            "Unknown User".to_owned()
        } else {
            trimmed.to_owned()
        };
        Self {
            id,
            display_name,
            role,
        }
    }

    /// Creates a citizen principal with a fresh identifier.
    #[must_use]
    pub fn citizen(display_name: impl Into<String>) -> Self {
        Self::new(PrincipalId::new(), display_name, Role::Citizen)
    }

    /// Creates an officer principal with a fresh identifier.
    #[must_use]
    pub fn officer(display_name: impl Into<String>, department: Department) -> Self {
        Self::new(PrincipalId::new(), display_name, Role::Officer { department })
    }

    /// Creates an administrator principal with a fresh identifier.
    #[must_use]
    pub fn administrator(display_name: impl Into<String>) -> Self {
        Self::new(PrincipalId::new(), display_name, Role::Administrator)
    }

    /// Returns the principal identifier.
    #[must_use]
    pub const fn id(&self) -> PrincipalId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }
}
