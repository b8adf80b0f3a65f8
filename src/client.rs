//! HTTP client for the T3 API
//!
//! Thin wrapper over `reqwest` that attaches the bearer token from the
//! session to every request and maps response statuses onto [`AppError`].
//! Requests are strictly sequential and never retried.
//!
//! # Example
//! ```ignore
//! use t3_client::client::HttpClient;
//! use t3_client::config::Config;
//!
//! let config = Config::new();
//! let client = HttpClient::new(config).await?;
//! let licenses: Vec<License> = client.get("/v2/licenses", &[]).await?;
//! ```

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::session::auth::{Auth, Session};
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// Query parameters as name/value pairs
pub type Query<'a> = [(&'a str, String)];

/// Client for the T3 API with bearer-token authentication
#[derive(Debug)]
pub struct HttpClient {
    auth: Arc<Auth>,
    http_client: Client,
    config: Arc<Config>,
}

impl HttpClient {
    /// Creates a new client and performs initial authentication
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Authenticated client ready to use
    /// * `Err(AppError)` - If authentication fails
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);

        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        let auth = Arc::new(Auth::new(config.clone()));
        auth.login().await?;

        Ok(Self {
            auth,
            http_client,
            config,
        })
    }

    /// Creates a new client without performing initial authentication
    ///
    /// Authentication happens automatically on the first request.
    pub fn new_lazy(config: Config) -> Self {
        let config = Arc::new(config);

        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()
            .expect("Failed to create HTTP client");

        let auth = Arc::new(Auth::new(config.clone()));

        Self {
            auth,
            http_client,
            config,
        }
    }

    /// Makes a GET request
    ///
    /// # Arguments
    /// * `path` - API endpoint path (e.g. `/v2/licenses`)
    /// * `query` - Query parameters as name/value pairs
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query<'_>,
    ) -> Result<T, AppError> {
        let response = self
            .request_internal(Method::GET, path, query, None::<&()>)
            .await?;
        Ok(response.json().await?)
    }

    /// Makes a POST request with a JSON body
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query<'_>,
        body: &B,
    ) -> Result<T, AppError> {
        let response = self
            .request_internal(Method::POST, path, query, Some(body))
            .await?;
        Ok(response.json().await?)
    }

    /// Makes a GET request and returns the raw response bytes
    ///
    /// Used for binary payloads such as manifest PDFs.
    pub async fn get_bytes(&self, path: &str, query: &Query<'_>) -> Result<Vec<u8>, AppError> {
        let response = self
            .request_internal(Method::GET, path, query, None::<&()>)
            .await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Internal method to make HTTP requests
    async fn request_internal<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        query: &Query<'_>,
        body: Option<&B>,
    ) -> Result<Response, AppError> {
        let session = self.auth.get_session().await?;

        let url = if path.starts_with("http") {
            path.to_string()
        } else {
            let path = path.trim_start_matches('/');
            format!("{}/{}", self.config.rest_api.base_url, path)
        };

        debug!("{} {}", method, url);

        let mut request = self
            .http_client
            .request(method, &url)
            .bearer_auth(&session.access_token)
            .header("Accept", "application/json");

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(b) = body {
            request = request.json(b);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        match status {
            s if s.is_success() => Ok(response),
            StatusCode::UNAUTHORIZED => {
                let body_text = response.text().await.unwrap_or_default();
                error!("Unauthorized: {}", body_text);
                Err(AppError::Unauthorized)
            }
            StatusCode::NOT_FOUND => Err(AppError::NotFound),
            _ => {
                let body_text = response.text().await.unwrap_or_default();
                error!("Request failed with status {}: {}", status, body_text);
                Err(AppError::Unexpected(status))
            }
        }
    }

    /// Gets the current session
    pub async fn get_session(&self) -> Result<Session, AppError> {
        self.auth.get_session().await
    }

    /// Gets the configuration this client was built with
    pub fn config(&self) -> Arc<Config> {
        self.config.clone()
    }

    /// Gets the Auth reference
    pub fn auth(&self) -> &Auth {
        &self.auth
    }
}
