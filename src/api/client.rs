//! HTTP client for the remote staff service.

use std::sync::Arc;

use reqwest::{Client, Method, RequestBuilder, Response, header::CONTENT_TYPE};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::{api::ApiError, session::SessionStore};

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://localhost:44325";

/// Configuration for connecting to the remote service.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Service address, e.g. `"https://localhost:44325"`.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Request body carrying the record id next to the payload fields.
#[derive(Debug, Serialize)]
pub(crate) struct WithId<'a, I, T> {
    pub(crate) id: I,

    #[serde(flatten)]
    pub(crate) body: &'a T,
}

/// JSON client that attaches the session's bearer token to every request.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
}

impl ApiClient {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: ApiConfig, session: Arc<dyn SessionStore>) -> Self {
        Self::with_client(Client::new(), config, session)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    #[must_use]
    pub fn with_client(http: Client, config: ApiConfig, session: Arc<dyn SessionStore>) -> Self {
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.request(Method::GET, path)).await?;

        decode(response).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .send(self.request(Method::POST, path).json(body))
            .await?;

        decode(response).await
    }

    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .send(self.request(Method::PUT, path).json(body))
            .await?;

        decode(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.request(Method::DELETE, path)).await?;

        Ok(())
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{path}", self.base_url);

        debug!(%method, %url, "sending request");

        let builder = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");

        match self.session.token() {
            Ok(Some(token)) => builder.bearer_auth(token),
            Ok(None) => builder,
            Err(source) => {
                warn!("failed to read session token, sending request without it: {source}");

                builder
            }
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await.map_err(ApiError::from_transport)?;

        if !response.status().is_success() {
            let error = ApiError::from_response(response).await;

            debug!("request failed: {error}");

            return Err(error);
        }

        Ok(response)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(ApiError::Decode)
}
