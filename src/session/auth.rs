//! Authentication for the T3 API
//!
//! A single `POST /v2/auth/credentials` call exchanges hostname, username
//! and password (plus an OTP for the hostname that requires one) for a
//! bearer token. There is no refresh endpoint and no retry: a failed login
//! aborts the run, and an expired token surfaces as `Unauthorized` on the
//! next request.

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::session::response::{AuthResponse, Identity};
use chrono::Utc;
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

/// Session information for authenticated requests
#[derive(Debug, Clone)]
pub struct Session {
    /// Bearer token attached to every API request
    pub access_token: String,
    /// Timestamp when the token was obtained (seconds since epoch)
    pub created_at: i64,
}

impl Session {
    /// Creates a new session with the current timestamp
    pub fn new(access_token: String) -> Self {
        Self {
            access_token,
            created_at: Utc::now().timestamp(),
        }
    }

    /// Seconds elapsed since the token was obtained
    #[must_use]
    pub fn age_seconds(&self) -> i64 {
        Utc::now().timestamp() - self.created_at
    }
}

/// Authentication manager for the T3 API
///
/// Handles the credential exchange and caches the resulting session for
/// the lifetime of the process. The session is discarded at exit and never
/// persisted.
#[derive(Debug)]
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    session: Arc<RwLock<Option<Session>>>,
}

impl Auth {
    /// Creates a new Auth instance
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    pub fn new(config: Arc<Config>) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            client,
            session: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the current session, logging in if none exists
    ///
    /// # Returns
    /// * `Ok(Session)` - Valid session with a bearer token
    /// * `Err(AppError)` - If authentication fails
    pub async fn get_session(&self) -> Result<Session, AppError> {
        let session = self.session.read().await;
        if let Some(sess) = session.as_ref() {
            return Ok(sess.clone());
        }
        drop(session);

        info!("No active session, logging in");
        self.login().await
    }

    /// Performs login against the credentials endpoint
    ///
    /// A single attempt: invalid credentials or a transport failure abort
    /// immediately without retrying.
    ///
    /// # Returns
    /// * `Ok(Session)` - Authenticated session
    /// * `Err(AppError)` - If login fails
    pub async fn login(&self) -> Result<Session, AppError> {
        let url = format!("{}/v2/auth/credentials", self.config.rest_api.base_url);

        let mut body = serde_json::json!({
            "hostname": self.config.credentials.hostname,
            "username": self.config.credentials.username,
            "password": self.config.credentials.password,
        });
        if let Some(otp) = &self.config.credentials.otp {
            body["otp"] = serde_json::json!(otp);
        }

        debug!("Sending login request to: {}", url);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let body = response.text().await.unwrap_or_default();
            error!("Login rejected with status {}: {}", status, body);
            return Err(AppError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Login failed with status {}: {}", status, body);
            return Err(AppError::Unexpected(status));
        }

        let json: AuthResponse = response.json().await?;
        let access_token = match json.access_token {
            Some(token) if !token.is_empty() => token,
            _ => {
                error!("Login response did not contain an access token");
                return Err(AppError::MissingField("accessToken"));
            }
        };

        let session = Session::new(access_token);

        let mut sess = self.session.write().await;
        *sess = Some(session.clone());

        info!(
            "✓ Login successful for {}/{}",
            self.config.credentials.hostname, self.config.credentials.username
        );
        Ok(session)
    }

    /// Retrieves the identity behind the current token
    ///
    /// # Returns
    /// * `Ok(Identity)` - Username and T3+ registration status
    /// * `Err(AppError)` - If the request fails
    pub async fn whoami(&self) -> Result<Identity, AppError> {
        let session = self.get_session().await?;
        let url = format!("{}/v2/auth/whoami", self.config.rest_api.base_url);

        debug!("Retrieving identity from: {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&session.access_token)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            let body = response.text().await.unwrap_or_default();
            error!("Unauthorized: {}", body);
            return Err(AppError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Identity request failed with status {}: {}", status, body);
            return Err(AppError::Unexpected(status));
        }

        Ok(response.json().await?)
    }

    /// Clears the current session
    pub async fn logout(&self) {
        let mut session = self.session.write().await;
        *session = None;
        info!("✓ Logged out");
    }
}
