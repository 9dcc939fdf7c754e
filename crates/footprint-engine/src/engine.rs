//! The scan engine port and its health probe types.

use crate::error::{EngineError, Result};
use async_trait::async_trait;
use footprint_core::{ScanRequest, ScanResponse};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Capability interface for anything that can answer a scan request.
///
/// The session controller only ever talks to this trait, so tests and
/// alternative transports can stand in for the HTTP engine.
#[async_trait]
pub trait ScanEngine: Send + Sync {
    /// Run one scan for the given request.
    ///
    /// # Errors
    /// Returns error if the engine rejects the request, the transport fails,
    /// or the response does not match the contract.
    async fn scan(&self, request: &ScanRequest) -> Result<ScanResponse>;

    /// Probe the engine's liveness endpoint.
    ///
    /// Engines without a probe keep the default, which reports an error.
    async fn health(&self) -> Result<HealthStatus> {
        Err(EngineError::Internal(format!(
            "engine '{}' does not expose a health probe",
            self.engine_id()
        )))
    }

    /// Get the unique identifier for this engine.
    fn engine_id(&self) -> &str;
}

/// Liveness report from `GET /api/health`.
///
/// The shape is engine-defined; only `status` is interpreted and every other
/// field is kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Reported status string
    #[serde(default = "unknown_status")]
    pub status: String,

    /// Any other fields the engine included
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

fn unknown_status() -> String {
    "unknown".to_string()
}

impl HealthStatus {
    /// Whether the status string is one the engine uses for "up".
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        matches!(
            self.status.to_ascii_lowercase().as_str(),
            "healthy" | "ok" | "online" | "up"
        )
    }
}
