//! Cloneable session handle for hosts with more than one task.

use crate::error::Result;
use crate::session::{Completion, ScanSession};
use crate::state::ScanState;
use footprint_core::ScanRequest;
use footprint_engine::ScanEngine;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

/// A [`ScanSession`] that can be reset from one task while another is
/// waiting on the engine.
///
/// The lock is only taken to begin and to finish a scan, never across the
/// engine call, so `reset` is never blocked by an in-flight request.
#[derive(Debug, Clone, Default)]
pub struct SharedScanSession {
    inner: Arc<Mutex<ScanSession>>,
}

impl SharedScanSession {
    /// Create a handle around a new idle session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // The session holds plain data, so a poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, ScanSession> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Id of the underlying session.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.lock().id()
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> ScanState {
        self.lock().state().clone()
    }

    /// Submit a request and wait for the engine.
    ///
    /// Returns [`Completion::Stale`] if the session was reset while the
    /// engine was working; the late outcome is dropped.
    ///
    /// # Errors
    /// Same as [`ScanSession::begin`].
    pub async fn submit(&self, engine: &dyn ScanEngine, request: ScanRequest) -> Result<Completion> {
        let ticket = self.lock().begin(request)?;
        let outcome = engine.scan(ticket.request()).await;
        Ok(self.lock().finish(ticket, outcome))
    }

    /// Return to `Idle`; any in-flight scan's outcome will be discarded.
    pub fn reset(&self) {
        self.lock().reset();
    }
}

impl From<ScanSession> for SharedScanSession {
    fn from(session: ScanSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }
}
