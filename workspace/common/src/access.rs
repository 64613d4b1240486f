//! Role/entity/operation access policy shared by the API handlers and the
//! permission-gated pages. The policy is a fixed table; tenant scoping of
//! individual records happens server-side on top of it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// CRUD operation being authorized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
}

/// Roles a session can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Member,
    Viewer,
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "member" => Ok(Role::Member),
            "viewer" => Ok(Role::Viewer),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Admin => "admin",
            Role::Member => "member",
            Role::Viewer => "viewer",
        };
        f.write_str(name)
    }
}

/// Whether `role` may perform `operation` on `entity`.
///
/// Entities are the internal singular names ("residential_user", "user").
/// Unknown entities are denied for every role.
pub fn role_allows(role: Role, entity: &str, operation: Operation) -> bool {
    match entity {
        "residential_user" => match role {
            Role::Admin => true,
            Role::Member => matches!(
                operation,
                Operation::Create | Operation::Read | Operation::Update
            ),
            Role::Viewer => matches!(operation, Operation::Read),
        },
        // Users are read-only through this module; account management
        // belongs to the platform.
        "user" => matches!(operation, Operation::Read),
        _ => false,
    }
}

/// Whether any of the session's roles grants the operation.
pub fn any_role_allows(roles: &[Role], entity: &str, operation: Operation) -> bool {
    roles
        .iter()
        .any(|role| role_allows(*role, entity, operation))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_has_full_access() {
        for op in [
            Operation::Create,
            Operation::Read,
            Operation::Update,
            Operation::Delete,
        ] {
            assert!(role_allows(Role::Admin, "residential_user", op));
        }
    }

    #[test]
    fn member_cannot_delete() {
        assert!(role_allows(Role::Member, "residential_user", Operation::Update));
        assert!(!role_allows(Role::Member, "residential_user", Operation::Delete));
    }

    #[test]
    fn viewer_is_read_only() {
        assert!(role_allows(Role::Viewer, "residential_user", Operation::Read));
        assert!(!role_allows(Role::Viewer, "residential_user", Operation::Create));
        assert!(!role_allows(Role::Viewer, "residential_user", Operation::Update));
    }

    #[test]
    fn users_are_read_only_for_everyone() {
        assert!(role_allows(Role::Viewer, "user", Operation::Read));
        assert!(!role_allows(Role::Admin, "user", Operation::Delete));
    }

    #[test]
    fn unknown_entity_is_denied() {
        assert!(!role_allows(Role::Admin, "organization", Operation::Read));
    }

    #[test]
    fn any_role_allows_uses_the_strongest_role() {
        let roles = vec![Role::Viewer, Role::Member];
        assert!(any_role_allows(&roles, "residential_user", Operation::Create));
        assert!(!any_role_allows(&roles, "residential_user", Operation::Delete));
    }

    #[test]
    fn role_parsing_round_trips() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!(" Member ".parse::<Role>().unwrap(), Role::Member);
        assert!("owner".parse::<Role>().is_err());
        assert_eq!(Role::Viewer.to_string(), "viewer");
    }
}
