//! `footprint scan`

use crate::{FormatArg, IdentifierKind};
use anyhow::{bail, Result};
use clap::Args;
use footprint_core::{IdentifierType, OutputFormat, ScanRequest};
use footprint_engine::ScanEngine;
use footprint_report::present;
use footprint_session::{ScanSession, ScanState, SessionError};
use std::io::Write;
use std::process::ExitCode;

/// Exit status for a scan the engine could not complete.
pub const EXIT_SCAN_FAILED: u8 = 1;

/// Exit status for a request rejected before dispatch.
pub const EXIT_INVALID_REQUEST: u8 = 2;

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Email address or username to scan
    pub identifier: String,

    /// Identifier type (inferred from '@' when omitted)
    #[arg(long = "type", value_enum)]
    pub identifier_type: Option<IdentifierKind>,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,
}

impl ScanArgs {
    fn request(&self) -> ScanRequest {
        let identifier_type = self
            .identifier_type
            .map_or_else(|| IdentifierType::infer(&self.identifier), Into::into);

        ScanRequest {
            identifier: self.identifier.clone(),
            identifier_type,
        }
    }
}

/// Run one scan in a fresh session and print the report.
pub async fn run(
    engine: &dyn ScanEngine,
    args: &ScanArgs,
    format: OutputFormat,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<ExitCode> {
    let request = args.request();
    if !request.is_plausible_email() {
        writeln!(
            err,
            "warning: '{}' does not look like an email address, scanning anyway",
            args.identifier
        )?;
    }

    let mut session = ScanSession::new();
    let state = match session.submit(engine, request).await {
        Ok(state) => state,
        Err(SessionError::InvalidRequest(e)) => {
            writeln!(err, "error: {e}")?;
            return Ok(ExitCode::from(EXIT_INVALID_REQUEST));
        }
        Err(e) => return Err(e.into()),
    };

    match state {
        ScanState::Succeeded(response) => {
            match format {
                OutputFormat::Text => {
                    writeln!(out, "Scan Results for {}", args.identifier)?;
                    writeln!(out)?;
                    write!(out, "{}", present(response))?;
                }
                OutputFormat::Json => {
                    serde_json::to_writer_pretty(&mut *out, response)?;
                    writeln!(out)?;
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        ScanState::Failed(message) => {
            writeln!(err, "{message}")?;
            Ok(ExitCode::from(EXIT_SCAN_FAILED))
        }
        ScanState::Idle | ScanState::Pending => {
            bail!("scan session ended in unexpected state '{state}'")
        }
    }
}
