//! Footprint Session - lifecycle of a single exposure scan.
//!
//! A [`ScanSession`] owns one scan attempt at a time:
//!
//! - `submit` validates the request, moves to `Pending` and makes exactly one
//!   engine call, ending in `Succeeded(response)` or `Failed(message)`
//! - a submit while `Pending` is refused; there is no retry and no cancellation
//! - `reset` returns to `Idle` from any state
//! - outcomes that arrive after a reset (or for another session) are dropped
//!
//! The engine is reached through the `ScanEngine` port from `footprint-engine`,
//! so the controller can be driven by any implementation.
//!
//! # Example
//!
//! ```rust,no_run
//! use footprint_core::{IdentifierType, ScanRequest};
//! use footprint_engine::HttpScanEngine;
//! use footprint_session::{ScanSession, ScanState};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = HttpScanEngine::new("http://localhost:8000")?;
//! let mut session = ScanSession::new();
//!
//! let request = ScanRequest::new("name@example.com", IdentifierType::Email)?;
//! match session.submit(&engine, request).await? {
//!     ScanState::Succeeded(response) => println!("score {:.1}", response.exposure_score),
//!     ScanState::Failed(message) => eprintln!("{message}"),
//!     _ => unreachable!("submit always completes"),
//! }
//!
//! session.reset();
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

/// Errors raised before a scan is dispatched.
pub mod error;
/// Owned session controller and dispatch tickets.
pub mod session;
/// Cloneable session handle.
pub mod shared;
/// The session state machine.
pub mod state;

pub use error::{Result, SessionError};
pub use session::{Completion, ScanSession, ScanTicket};
pub use shared::SharedScanSession;
pub use state::ScanState;
