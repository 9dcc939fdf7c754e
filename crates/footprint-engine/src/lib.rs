//! Footprint Engine - the port between a scan session and the scoring service.
//!
//! The exposure score, risk levels, breaches and cleanup plan are computed by
//! an external service. This crate defines the [`ScanEngine`] trait the
//! session controller dispatches through, and [`HttpScanEngine`], which
//! speaks the service's HTTP contract:
//!
//! ```text
//! POST {base}/api/scan    ScanRequest  → 2xx ScanResponse | non-2xx {"detail": "..."}
//! GET  {base}/api/health               → engine-defined status object
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use footprint_core::{IdentifierType, ScanRequest};
//! use footprint_engine::{HttpScanEngine, ScanEngine};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = HttpScanEngine::new("http://localhost:8000")?;
//! let request = ScanRequest::new("name@example.com", IdentifierType::Email)?;
//!
//! match engine.scan(&request).await {
//!     Ok(response) => println!("score: {:.1}", response.exposure_score),
//!     Err(e) => eprintln!("{}", e.failure_message()),
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod engine;
pub mod error;
pub mod http;

// Re-export commonly used types
pub use engine::{HealthStatus, ScanEngine};
pub use error::{detail_from_body, EngineError, FailureKind, Result, GENERIC_FAILURE_MESSAGE};
pub use http::HttpScanEngine;
