use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{ApiError, ProfileApi};
use crate::config::ClientConfig;
use crate::models::{
    Document, ErrorResponse, Listing, LoginRequest, LoginResponse, Payment, ProfileResponse,
    Property, Rental, Tenant,
};

/// Lightweight API client for the RentDesk backend.
#[derive(Clone, Debug)]
pub struct RentDeskClient {
    base_url: String,
    client: Client,
}

impl RentDeskClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.api_base_url)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorized(&self, request: RequestBuilder, token: &str) -> RequestBuilder {
        request.bearer_auth(token)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, token: &str) -> Result<T, ApiError> {
        let url = self.api_url(path);
        debug!(%url, "GET");
        let response = self
            .authorized(self.client.get(url), token)
            .send()
            .await?;
        read_json(response).await
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
    ) -> Result<Vec<T>, ApiError> {
        let listing: Listing<T> = self.get_json(path, token).await?;
        Ok(listing.into_items())
    }

    /// Exchange credentials for a bearer token.
    ///
    /// # Errors
    /// Returns [`ApiError::Status`] when the credentials are refused.
    pub async fn login(&self, payload: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.api_url("api/auth/login");
        let response = self.client.post(url).json(payload).send().await?;
        read_json(response).await
    }

    /// # Errors
    /// Returns [`ApiError`] when the request fails or the body is not a property list.
    pub async fn list_properties(&self, token: &str) -> Result<Vec<Property>, ApiError> {
        self.get_list("api/properties", token).await
    }

    /// # Errors
    /// Returns [`ApiError`] when the request fails or the body is not a tenant list.
    pub async fn list_tenants(&self, token: &str) -> Result<Vec<Tenant>, ApiError> {
        self.get_list("api/tenants", token).await
    }

    /// # Errors
    /// Returns [`ApiError`] when the request fails or the body is not a rental list.
    pub async fn list_rentals(&self, token: &str) -> Result<Vec<Rental>, ApiError> {
        self.get_list("api/rentals", token).await
    }

    /// # Errors
    /// Returns [`ApiError`] when the request fails or the body is not a payment list.
    pub async fn list_payments(&self, token: &str) -> Result<Vec<Payment>, ApiError> {
        self.get_list("api/payments", token).await
    }

    /// # Errors
    /// Returns [`ApiError`] when the request fails or the body is not a document list.
    pub async fn list_documents(&self, token: &str) -> Result<Vec<Document>, ApiError> {
        self.get_list("api/documents", token).await
    }
}

#[async_trait(?Send)]
impl ProfileApi for RentDeskClient {
    async fn fetch_profile(&self, token: &str) -> Result<ProfileResponse, ApiError> {
        self.get_json("api/auth/me", token).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let message = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .map(|body| body.message);
        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
        });
    }
    response
        .json()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}
