//! # Backend API
//!
//! Typed access to the RentDesk backend: the profile seam used by the
//! session resolver and the list endpoints the dashboards render.

mod client;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::ProfileResponse;

pub use client::RentDeskClient;

/// Errors produced by backend calls.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status, when the server answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Status {
                status: status.as_u16(),
                message: None,
            }
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Source of the authenticated user's profile.
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait ProfileApi {
    /// Fetch the current user with `token` as bearer credential.
    ///
    /// # Errors
    /// Returns [`ApiError::Status`] for any non-success response and
    /// [`ApiError::Network`] when the request could not be completed.
    async fn fetch_profile(&self, token: &str) -> Result<ProfileResponse, ApiError>;
}
