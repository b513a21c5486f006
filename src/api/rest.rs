//! REST implementation of the collection API
//!
//! One [`ApiClient`] is shared by every collection. URLs are built from the
//! configured base path, so the same binary can point at any OpenTrainer
//! deployment (or a mock server in tests).

use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, Response};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{OpenTrainerError, Result};
use crate::models::{Client, Record, RecordId};

use super::CollectionApi;

/// HTTP client for the OpenTrainer API.
pub struct ApiClient {
    http: HttpClient,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| OpenTrainerError::Api(format!("Failed to create HTTP client: {}", e)))?;

        tracing::info!("Initialized API client: base_url={}", config.base_url);

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Look up a client by email via the dedicated `/client/email/{email}`
    /// endpoint.
    pub async fn client_by_email(&self, email: &str) -> Result<Client> {
        let url = self.url(&format!("client/email/{}", email));
        let response = self.send(self.http.get(&url), &url).await?;
        Self::decode(response, "client").await
    }

    async fn send(&self, request: reqwest::RequestBuilder, url: &str) -> Result<Response> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("Request to {} failed: {}", url, e);
            OpenTrainerError::Api(format!("request to {} failed: {}", url, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Server returned {} for {}: {}", status, url, body);
            return Err(
                OpenTrainerError::Api(format!("{} returned {}: {}", url, status, body)).into(),
            );
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response, collection: &str) -> Result<T> {
        response.json::<T>().await.map_err(|e| {
            tracing::error!("Failed to parse {} response: {}", collection, e);
            OpenTrainerError::Api(format!("failed to parse {} response: {}", collection, e)).into()
        })
    }
}

/// [`CollectionApi`] implementation for one record type over a shared
/// [`ApiClient`].
pub struct RestCollection<T: Record> {
    api: Arc<ApiClient>,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> RestCollection<T> {
    /// Bind a collection to a shared API client.
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            _record: PhantomData,
        }
    }
}

#[async_trait]
impl<T: Record> CollectionApi<T> for RestCollection<T> {
    async fn list(&self) -> Result<Vec<T>> {
        let url = self.api.url(T::COLLECTION);
        tracing::debug!("GET {}", url);
        let response = self.api.send(self.api.http.get(&url), &url).await?;
        ApiClient::decode(response, T::COLLECTION).await
    }

    async fn get(&self, id: RecordId) -> Result<T> {
        let url = self.api.url(&format!("{}/{}", T::COLLECTION, id));
        tracing::debug!("GET {}", url);
        let response = self.api.send(self.api.http.get(&url), &url).await?;
        ApiClient::decode(response, T::COLLECTION).await
    }

    async fn create(&self, draft: &T::Draft) -> Result<T> {
        let url = self.api.url(T::COLLECTION);
        tracing::debug!("POST {}", url);
        let response = self
            .api
            .send(self.api.http.post(&url).json(draft), &url)
            .await?;
        ApiClient::decode(response, T::COLLECTION).await
    }

    async fn update(&self, id: RecordId, draft: &T::Draft) -> Result<T> {
        let url = self.api.url(&format!("{}/{}", T::COLLECTION, id));
        tracing::debug!("PUT {}", url);
        let response = self
            .api
            .send(self.api.http.put(&url).json(draft), &url)
            .await?;
        ApiClient::decode(response, T::COLLECTION).await
    }

    async fn delete(&self, id: RecordId) -> Result<()> {
        let url = self.api.url(&format!("{}/{}", T::COLLECTION, id));
        tracing::debug!("DELETE {}", url);
        self.api.send(self.api.http.delete(&url), &url).await?;
        Ok(())
    }
}
