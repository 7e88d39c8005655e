use thiserror::Error;

use super::token::TokenDecodeError;
use crate::api::ApiError;

/// Why a resolve ended logged out.
///
/// Every variant leads to the same outcome; the distinction only survives in
/// diagnostics.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthFailure {
    #[error("no token in storage")]
    NoToken,
    #[error("token could not be decoded: {0}")]
    Decode(#[from] TokenDecodeError),
    #[error("token carries unrecognized role `{0}`")]
    InvalidRole(String),
    #[error("profile request failed: {0}")]
    ProfileNetwork(String),
    #[error("profile request returned status {0}")]
    ProfileStatus(u16),
}

impl From<ApiError> for AuthFailure {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status { status, .. } => Self::ProfileStatus(status),
            other => Self::ProfileNetwork(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_errors_split_into_status_and_network() {
        let status = AuthFailure::from(ApiError::Status {
            status: 401,
            message: None,
        });
        assert_eq!(status, AuthFailure::ProfileStatus(401));

        let network = AuthFailure::from(ApiError::Network("connection refused".into()));
        assert!(matches!(network, AuthFailure::ProfileNetwork(msg) if msg.contains("connection refused")));
    }
}
