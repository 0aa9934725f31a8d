//! HTTP transport used by every entity.
//!
//! [`Session`] is the seam between entities and the network: entities only
//! ever see a [`SessionResponse`] (status plus raw body) and decide for
//! themselves what a non-2xx status means. [`HttpSession`] is the
//! [`reqwest`]-backed implementation used against a real tower.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use towerlib_core::error::TowerResult;

use crate::config::TowerConfig;

/// Status and raw body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: String,
}

impl SessionResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for any 2xx status.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn text(&self) -> &str {
        &self.body
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> TowerResult<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Transport for talking to the tower REST API.
///
/// Implementations return `Err` only when no response was obtained at all;
/// any status code the server sends back is an `Ok` response.
#[async_trait]
pub trait Session: Send + Sync {
    async fn get(&self, url: &str) -> TowerResult<SessionResponse>;

    async fn post(&self, url: &str, payload: &serde_json::Value) -> TowerResult<SessionResponse>;

    async fn patch(&self, url: &str, payload: &serde_json::Value)
        -> TowerResult<SessionResponse>;
}

/// [`reqwest`] session authenticating every request with HTTP basic auth.
pub struct HttpSession {
    client: reqwest::Client,
    username: String,
    password: String,
}

impl HttpSession {
    /// Build a session with its own client, honouring the configured timeout
    /// and TLS verification setting.
    pub fn new(config: &TowerConfig) -> TowerResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(!config.ssl_verify)
            .build()?;
        Ok(Self::with_client(
            client,
            config.username.clone(),
            config.password.clone(),
        ))
    }

    /// Create a session reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across several towers).
    pub fn with_client(client: reqwest::Client, username: String, password: String) -> Self {
        Self {
            client,
            username,
            password,
        }
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> TowerResult<SessionResponse> {
        let response = request
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        tracing::debug!(status, "Tower responded");
        Ok(SessionResponse { status, body })
    }
}

#[async_trait]
impl Session for HttpSession {
    async fn get(&self, url: &str) -> TowerResult<SessionResponse> {
        self.send(self.client.get(url)).await
    }

    async fn post(&self, url: &str, payload: &serde_json::Value) -> TowerResult<SessionResponse> {
        self.send(self.client.post(url).json(payload)).await
    }

    async fn patch(
        &self,
        url: &str,
        payload: &serde_json::Value,
    ) -> TowerResult<SessionResponse> {
        self.send(self.client.patch(url).json(payload)).await
    }
}
