use serde::{Deserialize, Serialize};

use super::{EntityId, Role};

/// Body of `GET /api/auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    /// Unique identifier for the user.
    pub id: EntityId,

    /// The user's email address.
    pub email: String,

    /// Given name.
    pub first_name: String,

    /// Family name.
    pub last_name: String,

    /// Role string as reported by the backend, when it sends one.
    #[serde(default)]
    pub role: Option<String>,
}

/// Authenticated user as held by a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: EntityId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

impl Profile {
    /// Merge a fetched profile with the role the session resolved.
    #[must_use]
    pub fn from_response(response: ProfileResponse, role: Role) -> Self {
        Self {
            id: response.id,
            email: response.email,
            first_name: response.first_name,
            last_name: response.last_name,
            role,
        }
    }

    #[must_use]
    pub fn full_name(&self) -> String {
        crate::format::full_name(&self.first_name, &self.last_name)
    }
}

/// Request to authenticate with email and password.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response of `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// Bearer token to persist.
    #[serde(alias = "accessToken", alias = "jwt")]
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_response_from_backend_json() {
        let json = r#"{
            "id": 7,
            "email": "owner@example.com",
            "firstName": "Ada",
            "lastName": "Lovelace"
        }"#;
        let response: ProfileResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.id, EntityId::Numeric(7));
        assert_eq!(response.first_name, "Ada");
        assert_eq!(response.role, None);
    }

    #[test]
    fn profile_takes_the_resolved_role() {
        let response = ProfileResponse {
            id: EntityId::from("u-1"),
            email: "tenant@example.com".to_string(),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            role: Some("OWNER".to_string()),
        };
        let profile = Profile::from_response(response, Role::Tenant);

        assert_eq!(profile.role, Role::Tenant);
        assert_eq!(profile.full_name(), "Grace Hopper");
    }

    #[test]
    fn login_response_accepts_access_token_alias() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"accessToken": "abc.def.ghi"}"#).unwrap();
        assert_eq!(response.token, "abc.def.ghi");
    }
}
