//! Owned scan session controller.

use crate::error::{Result, SessionError};
use crate::state::ScanState;
use footprint_core::{ScanRequest, ScanResponse};
use footprint_engine::ScanEngine;
use uuid::Uuid;

/// Proof of one dispatch, handed out by [`ScanSession::begin`].
///
/// The ticket owns the request until the outcome is applied, then the
/// request is dropped (and its identifier wiped).
#[derive(Debug)]
pub struct ScanTicket {
    session_id: Uuid,
    generation: u64,
    request: ScanRequest,
}

impl ScanTicket {
    /// The request to dispatch.
    #[must_use]
    pub fn request(&self) -> &ScanRequest {
        &self.request
    }

    /// Generation of the session this ticket was issued at.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What [`ScanSession::finish`] did with an outcome.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The outcome became the session's state
    Applied,
    /// The ticket no longer matches the session; nothing changed
    Stale,
}

/// A single user's scan session.
///
/// Holds at most one in-flight scan. Every `begin` and `reset` advances the
/// generation, so an outcome for an older ticket can never overwrite newer
/// state.
#[derive(Debug)]
pub struct ScanSession {
    id: Uuid,
    generation: u64,
    state: ScanState,
}

impl ScanSession {
    /// Create a new idle session.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            generation: 0,
            state: ScanState::Idle,
        }
    }

    /// Unique id of this session.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// Whether a scan is in flight.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.state.is_pending()
    }

    /// The held response, if the last scan succeeded.
    #[must_use]
    pub fn response(&self) -> Option<&ScanResponse> {
        self.state.response()
    }

    /// The failure message, if the last scan failed.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.state.error_message()
    }

    /// Validate a request and move to `Pending`.
    ///
    /// On error the state is left exactly as it was.
    ///
    /// # Errors
    /// - `SessionError::ScanInProgress` while a scan is pending
    /// - `SessionError::InvalidRequest` if the identifier is empty
    pub fn begin(&mut self, request: ScanRequest) -> Result<ScanTicket> {
        if self.state.is_pending() {
            tracing::warn!(session = %self.id, "Rejected submit: scan already in progress");
            return Err(SessionError::ScanInProgress);
        }

        if let Err(e) = request.validate() {
            tracing::debug!(session = %self.id, "Rejected submit: invalid request");
            return Err(e.into());
        }

        self.generation += 1;
        self.state = ScanState::Pending;

        tracing::info!(
            session = %self.id,
            generation = self.generation,
            identifier_type = %request.identifier_type,
            "Scan started"
        );

        Ok(ScanTicket {
            session_id: self.id,
            generation: self.generation,
            request,
        })
    }

    /// Apply the engine's outcome for a ticket.
    ///
    /// Returns [`Completion::Stale`] without touching the state if the
    /// ticket came from another session, or if the session was reset or
    /// resubmitted since the ticket was issued.
    pub fn finish(
        &mut self,
        ticket: ScanTicket,
        outcome: footprint_engine::Result<ScanResponse>,
    ) -> Completion {
        if ticket.session_id != self.id
            || ticket.generation != self.generation
            || !self.state.is_pending()
        {
            tracing::debug!(
                session = %self.id,
                ticket_generation = ticket.generation,
                current_generation = self.generation,
                "Discarding stale scan outcome"
            );
            return Completion::Stale;
        }

        match outcome {
            Ok(response) => {
                tracing::info!(
                    session = %self.id,
                    generation = self.generation,
                    categories = response.categories.len(),
                    breaches = response.breaches.len(),
                    "Scan succeeded"
                );
                self.state = ScanState::Succeeded(response);
            }
            Err(e) => {
                tracing::warn!(
                    session = %self.id,
                    generation = self.generation,
                    kind = ?e.kind(),
                    status = ?e.status(),
                    "Scan failed"
                );
                self.state = ScanState::Failed(e.failure_message());
            }
        }

        Completion::Applied
    }

    /// Submit a request and wait for the engine.
    ///
    /// Exactly one engine call is made per accepted submit; none when the
    /// submit is refused.
    ///
    /// # Errors
    /// Same as [`ScanSession::begin`]. Engine failures are not errors here:
    /// they end in `ScanState::Failed`.
    pub async fn submit(
        &mut self,
        engine: &dyn ScanEngine,
        request: ScanRequest,
    ) -> Result<&ScanState> {
        let ticket = self.begin(request)?;
        let outcome = engine.scan(ticket.request()).await;
        let _ = self.finish(ticket, outcome);
        Ok(&self.state)
    }

    /// Return to `Idle`, dropping any held response or message.
    ///
    /// Outstanding tickets become stale.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = ScanState::Idle;
        tracing::info!(session = %self.id, generation = self.generation, "Session reset");
    }
}

impl Default for ScanSession {
    fn default() -> Self {
        Self::new()
    }
}
