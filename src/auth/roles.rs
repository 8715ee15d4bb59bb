// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! User roles for authorization.
//!
//! Roles are opaque, application-defined strings. The gateway never
//! enumerates or validates them: a token carries whatever role string was
//! set at issuance, and authorization is an exact, case-sensitive equality
//! check against the role a route requires. There is no hierarchy: an
//! "admin" role does not implicitly satisfy a "user" requirement.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An opaque role string compared by exact equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct Role(String);

impl Role {
    pub fn new(role: impl Into<String>) -> Self {
        Self(role.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Role {
    fn from(role: &str) -> Self {
        Self(role.to_string())
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_exact() {
        assert_eq!(Role::new("admin"), Role::from("admin"));
        assert_ne!(Role::new("admin"), Role::new("user"));
    }

    #[test]
    fn equality_is_case_sensitive() {
        assert_ne!(Role::new("admin"), Role::new("Admin"));
        assert_ne!(Role::new("admin"), Role::new("ADMIN"));
    }

    #[test]
    fn serializes_as_bare_string() {
        let role = Role::new("admin");
        assert_eq!(serde_json::to_string(&role).unwrap(), r#""admin""#);

        let parsed: Role = serde_json::from_str(r#""user""#).unwrap();
        assert_eq!(parsed, Role::new("user"));
    }

    #[test]
    fn displays_inner_string() {
        assert_eq!(Role::new("support").to_string(), "support");
    }
}
