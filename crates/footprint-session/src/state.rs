//! The scan session state machine.

use footprint_core::ScanResponse;
use std::fmt;

/// Lifecycle state of a scan session.
///
/// ```text
///            submit                 engine Ok
///   Idle ─────────────▶ Pending ─────────────▶ Succeeded(response)
///    ▲                     │
///    │ reset (any state)   │ engine Err
///    └─────────────────────┴──────────────────▶ Failed(message)
/// ```
///
/// `Succeeded` and `Failed` accept a new submit, which discards the held
/// value and moves back to `Pending`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ScanState {
    /// Nothing submitted, or reset
    #[default]
    Idle,
    /// A scan is in flight
    Pending,
    /// The engine answered; the response is held until reset or resubmit
    Succeeded(ScanResponse),
    /// The scan failed with a user-facing message
    Failed(String),
}

impl ScanState {
    /// Whether the session is idle.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Whether a scan is in flight.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// The held response, if the last scan succeeded.
    #[must_use]
    pub fn response(&self) -> Option<&ScanResponse> {
        match self {
            Self::Succeeded(response) => Some(response),
            _ => None,
        }
    }

    /// The failure message, if the last scan failed.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Short lowercase name of the state, for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pending => "pending",
            Self::Succeeded(_) => "succeeded",
            Self::Failed(_) => "failed",
        }
    }
}

impl fmt::Display for ScanState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
