//! Error types for talking to the scan engine.

use thiserror::Error;

/// Message shown when the engine gives no usable detail.
pub const GENERIC_FAILURE_MESSAGE: &str = "Scan failed. Please try again.";

/// Errors that can occur while dispatching a scan to the engine.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Engine answered with a non-2xx status
    #[error("engine returned status {status}")]
    Api {
        /// HTTP status code
        status: u16,
        /// The `detail` string from the error body, if there was one
        detail: Option<String>,
    },

    /// Network error (connection refused, DNS, TLS, ...)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Request did not complete within the transport timeout
    #[error("request timed out after {seconds}s")]
    Timeout {
        /// Timeout duration in seconds
        seconds: u64,
    },

    /// A 2xx response whose body does not match the contract
    #[error("failed to parse engine response: {message}")]
    Parse {
        /// Error message
        message: String,
    },

    /// Engine base URL is unusable
    #[error("invalid engine URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The rejected URL
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// Internal error (client construction, unsupported operation)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Coarse classification of an engine failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The engine reported a structured reason
    Engine,
    /// Anything else: network, timeout, unparseable or detail-less responses
    Transport,
}

impl EngineError {
    /// Classify the error.
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Api {
                detail: Some(_), ..
            } => FailureKind::Engine,
            _ => FailureKind::Transport,
        }
    }

    /// User-facing failure message.
    ///
    /// The engine's `detail` verbatim when present, otherwise
    /// [`GENERIC_FAILURE_MESSAGE`].
    #[must_use]
    pub fn failure_message(&self) -> String {
        match self {
            Self::Api {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }

    /// HTTP status code, when the engine answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Extract the `detail` string from an engine error body.
///
/// Returns `None` for non-JSON bodies, bodies without `detail`, a `detail`
/// that is not a string (e.g. a validation error list), or an empty string.
#[must_use]
pub fn detail_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")
        .and_then(serde_json::Value::as_str)
        .filter(|detail| !detail.is_empty())
        .map(ToString::to_string)
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_verbatim() {
        let err = EngineError::Api {
            status: 429,
            detail: detail_from_body(r#"{"detail": "rate limited"}"#),
        };
        assert_eq!(err.kind(), FailureKind::Engine);
        assert_eq!(err.failure_message(), "rate limited");
        assert_eq!(err.status(), Some(429));
    }

    #[test]
    fn test_missing_detail_falls_back() {
        let bodies = [
            "",
            "<html>Bad Gateway</html>",
            r#"{"error": "boom"}"#,
            r#"{"detail": ""}"#,
            r#"{"detail": [{"loc": ["body", "identifier"], "msg": "field required"}]}"#,
        ];

        for body in bodies {
            let err = EngineError::Api {
                status: 500,
                detail: detail_from_body(body),
            };
            assert_eq!(err.kind(), FailureKind::Transport, "body: {body}");
            assert_eq!(err.failure_message(), GENERIC_FAILURE_MESSAGE);
        }
    }

    #[test]
    fn test_transport_errors_use_generic_message() {
        let errors = [
            EngineError::Timeout { seconds: 30 },
            EngineError::Parse {
                message: "missing field `risk_level`".to_string(),
            },
            EngineError::Internal("no client".to_string()),
        ];

        for err in errors {
            assert_eq!(err.kind(), FailureKind::Transport);
            assert_eq!(err.failure_message(), GENERIC_FAILURE_MESSAGE);
            assert_eq!(err.status(), None);
        }
    }

    #[test]
    fn test_error_display() {
        let err = EngineError::Timeout { seconds: 5 };
        assert_eq!(err.to_string(), "request timed out after 5s");

        let err = EngineError::Api {
            status: 503,
            detail: None,
        };
        assert_eq!(err.to_string(), "engine returned status 503");
    }
}
