use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{EntityId, RoleClaim};

/// Errors produced while reading a token payload.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenDecodeError {
    #[error("token is not a three-part JWT")]
    Malformed,
    #[error("token payload is not base64url: {0}")]
    Encoding(String),
    #[error("token payload is not a claims object: {0}")]
    Claims(String),
}

/// Claims read from the payload segment of a bearer token.
///
/// The signature is not checked here: the claims only steer client-side
/// routing and the backend validates the token on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
    #[serde(default)]
    pub sub: Option<EntityId>,
    #[serde(default)]
    pub user_id: Option<EntityId>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub iat: Option<i64>,
    #[serde(default)]
    pub exp: Option<i64>,
}

impl TokenClaims {
    /// Subject identifier, preferring `sub` over `userId`.
    #[must_use]
    pub fn subject(&self) -> Option<&EntityId> {
        self.sub.as_ref().or(self.user_id.as_ref())
    }

    #[must_use]
    pub fn role_claim(&self) -> RoleClaim {
        RoleClaim::from(self.role.as_str())
    }
}

/// Decode the claims of a `header.payload.signature` token.
///
/// # Errors
/// Returns [`TokenDecodeError`] when the token does not have three segments,
/// when the payload is not base64url, or when it is not a JSON object.
pub fn decode_claims(token: &str) -> Result<TokenClaims, TokenDecodeError> {
    let mut segments = token.trim().split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(TokenDecodeError::Malformed);
    };
    if payload.is_empty() {
        return Err(TokenDecodeError::Malformed);
    }

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|err| TokenDecodeError::Encoding(err.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|err| TokenDecodeError::Claims(err.to_string()))
}
