//! `footprint health`

use anyhow::Result;
use footprint_engine::{HttpScanEngine, ScanEngine};
use std::io::Write;
use std::process::ExitCode;

/// Probe the engine and print its status.
pub async fn run(engine: &HttpScanEngine, out: &mut impl Write) -> Result<ExitCode> {
    match engine.health().await {
        Ok(status) if status.is_healthy() => {
            writeln!(out, "{}: {}", engine.base_url(), status.status)?;
            Ok(ExitCode::SUCCESS)
        }
        Ok(status) => {
            writeln!(out, "{}: unhealthy ({})", engine.base_url(), status.status)?;
            Ok(ExitCode::FAILURE)
        }
        Err(e) => {
            tracing::debug!("Health probe failed: {}", e);
            writeln!(out, "{}: unreachable ({e})", engine.base_url())?;
            Ok(ExitCode::FAILURE)
        }
    }
}
