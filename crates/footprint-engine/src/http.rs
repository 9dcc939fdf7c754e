//! HTTP adapter for the external scanning service.

use crate::engine::{HealthStatus, ScanEngine};
use crate::error::{detail_from_body, EngineError, Result};
use async_trait::async_trait;
use footprint_core::{EngineConfig, ScanRequest, ScanResponse};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Scan engine reached over HTTP (`POST /api/scan`, `GET /api/health`).
pub struct HttpScanEngine {
    client: Client,
    base_url: String,
    timeout_secs: u64,
}

impl HttpScanEngine {
    /// Create an engine client for the given base URL with default settings.
    ///
    /// # Errors
    /// Returns error if the URL is not http(s) or the HTTP client cannot be created.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_settings(
            base_url,
            DEFAULT_TIMEOUT_SECS,
            concat!("Footprint/", env!("CARGO_PKG_VERSION")),
        )
    }

    /// Create an engine client from the `[engine]` config section.
    ///
    /// # Errors
    /// Returns error if the URL is not http(s) or the HTTP client cannot be created.
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        Self::with_settings(
            config.base_url.clone(),
            config.timeout_secs,
            &config.user_agent,
        )
    }

    /// Create an engine client with explicit timeout and user agent.
    ///
    /// # Errors
    /// Returns error if the URL is not http(s) or the HTTP client cannot be created.
    pub fn with_settings(
        base_url: impl Into<String>,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self> {
        let base_url = base_url.into();
        let parsed = url::Url::parse(&base_url).map_err(|e| EngineError::InvalidBaseUrl {
            url: base_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(EngineError::InvalidBaseUrl {
                url: base_url,
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()
            .map_err(|e| EngineError::Internal(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs,
        })
    }

    /// Base URL requests are sent to, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Map a reqwest failure, keeping timeouts distinct.
    fn transport_error(&self, err: reqwest::Error) -> EngineError {
        if err.is_timeout() {
            EngineError::Timeout {
                seconds: self.timeout_secs,
            }
        } else {
            EngineError::Network(err)
        }
    }

    /// Turn a response into a typed body or an `Api`/`Parse` error.
    async fn decode<T: DeserializeOwned>(&self, response: Response, what: &str) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = detail_from_body(&body);
            tracing::warn!(
                status = status.as_u16(),
                has_detail = detail.is_some(),
                "{what} request rejected by engine"
            );
            return Err(EngineError::Api {
                status: status.as_u16(),
                detail,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;

        serde_json::from_str(&body).map_err(|e| EngineError::Parse {
            message: format!("invalid {what} response: {e}"),
        })
    }
}

#[async_trait]
impl ScanEngine for HttpScanEngine {
    async fn scan(&self, request: &ScanRequest) -> Result<ScanResponse> {
        tracing::debug!(
            identifier_type = %request.identifier_type,
            "Dispatching scan to {}",
            self.base_url
        );

        let response = self
            .client
            .post(self.endpoint("/api/scan"))
            .json(request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        self.decode(response, "scan").await
    }

    async fn health(&self) -> Result<HealthStatus> {
        let response = self
            .client
            .get(self.endpoint("/api/health"))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        self.decode(response, "health").await
    }

    fn engine_id(&self) -> &str {
        "http"
    }
}
