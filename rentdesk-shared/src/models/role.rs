use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Account roles known to the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[serde(alias = "owner")]
    Owner,
    #[serde(alias = "tenant")]
    Tenant,
    #[serde(alias = "admin")]
    Admin,
}

impl Role {
    /// Return the canonical string representation used on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "OWNER",
            Self::Tenant => "TENANT",
            Self::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "OWNER" => Ok(Self::Owner),
            "TENANT" => Ok(Self::Tenant),
            "ADMIN" => Ok(Self::Admin),
            _ => Err("unknown role"),
        }
    }
}

/// Role hint carried by a bearer token.
///
/// Only owners and tenants can hold a dashboard session; every other value,
/// including `admin`, is kept verbatim as [`RoleClaim::Unrecognized`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleClaim {
    Owner,
    Tenant,
    Unrecognized(String),
}

impl RoleClaim {
    /// The session role this claim grants, if any.
    #[must_use]
    pub fn session_role(&self) -> Option<Role> {
        match self {
            Self::Owner => Some(Role::Owner),
            Self::Tenant => Some(Role::Tenant),
            Self::Unrecognized(_) => None,
        }
    }
}

impl From<&str> for RoleClaim {
    fn from(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("owner") {
            Self::Owner
        } else if trimmed.eq_ignore_ascii_case("tenant") {
            Self::Tenant
        } else {
            Self::Unrecognized(raw.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("owner", RoleClaim::Owner ; "lowercase owner")]
    #[test_case("OWNER", RoleClaim::Owner ; "uppercase owner")]
    #[test_case(" Tenant ", RoleClaim::Tenant ; "padded mixed case tenant")]
    #[test_case("admin", RoleClaim::Unrecognized("admin".to_string()) ; "admin is not a session role")]
    #[test_case("", RoleClaim::Unrecognized(String::new()) ; "empty claim")]
    fn role_claim_mapping(raw: &str, expected: RoleClaim) {
        assert_eq!(RoleClaim::from(raw), expected);
    }

    #[test]
    fn only_owner_and_tenant_become_session_roles() {
        assert_eq!(RoleClaim::Owner.session_role(), Some(Role::Owner));
        assert_eq!(RoleClaim::Tenant.session_role(), Some(Role::Tenant));
        assert_eq!(
            RoleClaim::Unrecognized("ADMIN".into()).session_role(),
            None
        );
    }

    #[test]
    fn role_wire_format() {
        assert_eq!(serde_json::to_string(&Role::Owner).unwrap(), "\"OWNER\"");
        let parsed: Role = serde_json::from_str("\"tenant\"").unwrap();
        assert_eq!(parsed, Role::Tenant);
        assert_eq!(Role::from_str("Admin").unwrap(), Role::Admin);
        assert!(Role::from_str("landlord").is_err());
    }
}
