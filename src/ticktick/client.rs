//! HTTP client for the TickTick open API.
//!
//! The API signals application-level failures inside successful transport
//! responses: callers receive either a collection payload or an object
//! carrying an `error` key. `ClientError` is reserved for transport
//! faults (connect, timeout, body decode) and client construction.

use async_trait::async_trait;
use miette::Diagnostic;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::{Value, json};
use thiserror::Error;

/// Base URL of the TickTick open API.
pub const DEFAULT_BASE_URL: &str = "https://api.ticktick.com/open/v1";

#[derive(Error, Diagnostic, Debug)]
pub enum ClientError {
    #[error("Failed to reach TickTick API")]
    #[diagnostic(
        code(ticktick_mcp::client::connection_failed),
        help("Check network connectivity to api.ticktick.com.")
    )]
    ConnectionFailed {
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid response from TickTick API: {message}")]
    #[diagnostic(code(ticktick_mcp::client::invalid_response))]
    InvalidResponse { message: String },

    #[error("Failed to construct HTTP client: {message}")]
    #[diagnostic(code(ticktick_mcp::client::init))]
    Init { message: String },
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            ClientError::ConnectionFailed { source: e }
        } else {
            ClientError::InvalidResponse {
                message: e.to_string(),
            }
        }
    }
}

/// The slice of the TickTick API this server consumes.
///
/// Both operations return the raw JSON payload: a collection on success
/// or an object with an `error` key when the API rejected the request.
/// `Err` is transport-only.
#[async_trait]
pub trait TickTickApi: Send + Sync {
    /// `GET /project`: every project in the account.
    async fn get_projects(&self) -> Result<Value, ClientError>;

    /// Tasks of one project, extracted from `GET /project/{id}/data`.
    async fn get_project_tasks(&self, project_id: &str) -> Result<Value, ClientError>;
}

/// Client bound to a single bearer token for the process lifetime.
#[derive(Debug)]
pub struct TickTickClient {
    base_url: String,
    http: reqwest::Client,
}

impl TickTickClient {
    pub fn new(token: &str) -> Result<Self, ClientError> {
        Self::with_base_url(token, DEFAULT_BASE_URL)
    }

    /// Point the client at a different base URL (self-hosted proxies,
    /// integration tests).
    pub fn with_base_url(token: &str, base_url: impl Into<String>) -> Result<Self, ClientError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| {
            ClientError::Init {
                message: e.to_string(),
            }
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ClientError::Init {
                message: e.to_string(),
            })?;

        Ok(Self {
            base_url: base_url.into(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json(&self, path: &str) -> Result<Value, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ClientError::InvalidResponse {
                    message: e.to_string(),
                })
        } else {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::debug!(%status, "TickTick API request failed: {body}");
            Ok(json!({
                "error": format!("API request failed ({}): {}", status.as_u16(), body),
            }))
        }
    }
}

#[async_trait]
impl TickTickApi for TickTickClient {
    async fn get_projects(&self) -> Result<Value, ClientError> {
        self.get_json("/project").await
    }

    async fn get_project_tasks(&self, project_id: &str) -> Result<Value, ClientError> {
        let payload = self
            .get_json(&format!("/project/{project_id}/data"))
            .await?;

        if payload.get("error").is_some() {
            return Ok(payload);
        }

        // The project-data payload wraps tasks alongside project metadata
        // and kanban columns; only the tasks array is of interest here.
        Ok(payload
            .get("tasks")
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new())))
    }
}
