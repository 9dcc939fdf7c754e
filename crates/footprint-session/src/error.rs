use footprint_core::FootprintError;
use thiserror::Error;

/// Reasons a submission is refused before anything is dispatched.
///
/// Engine and transport failures are not errors at this level; they end the
/// scan in `ScanState::Failed`.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The request failed local validation (e.g. empty identifier)
    #[error("invalid scan request: {0}")]
    InvalidRequest(#[from] FootprintError),

    /// A scan is already in flight for this session
    #[error("a scan is already in progress for this session")]
    ScanInProgress,
}

/// Result type alias for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
