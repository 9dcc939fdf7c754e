//! Footprint Core - Foundation crate for the Footprint exposure scanner.
//!
//! This crate provides the scan contract shared with the external scoring
//! engine, the central error type, and configuration management that all
//! other Footprint crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`types`] - Scan request/response contract (`ScanRequest`, `ScanResponse`, ...)
//!
//! # Example
//!
//! ```rust
//! use footprint_core::{AppConfig, IdentifierType, ScanRequest};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::default();
//! assert_eq!(config.engine.base_url, "http://localhost:8000");
//!
//! let request = ScanRequest::new("name@example.com", IdentifierType::Email)?;
//! assert!(request.is_plausible_email());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{AppConfig, EngineConfig, OutputConfig, OutputFormat};
pub use error::{ConfigError, ConfigResult, FootprintError, Result};
pub use types::{
    BreachInfo, CleanupAction, ExposureCategory, IdentifierType, ScanRequest, ScanResponse,
};
