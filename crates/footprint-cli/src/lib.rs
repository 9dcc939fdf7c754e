//! Footprint command-line shell.
//!
//! This is the thin application shell that parses arguments, loads
//! configuration and wires the engine, session and report crates together.
//! Scan logic lives in the other `crates/`.

pub mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use footprint_core::{AppConfig, IdentifierType, OutputFormat};
use std::path::PathBuf;
use std::process::ExitCode;

/// Footprint - see where your email or username is exposed online
#[derive(Parser, Debug)]
#[command(
    name = "footprint",
    version,
    about = "Privacy-first personal data footprint scanner",
    long_about = "Footprint submits an email address or username to a scanning service and \
                  prints an exposure report: score, risk level, exposure categories, known \
                  breaches and a prioritized cleanup plan.\n\n\
                  Nothing is stored: the identifier lives only for the duration of the scan."
)]
pub struct Cli {
    /// Configuration file path (defaults to the XDG config location)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Scanning service base URL, overrides config and FOOTPRINT_API_URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Enable verbose logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan an email address or username
    #[command(visible_alias = "s")]
    Scan(commands::scan::ScanArgs),

    /// Check that the scanning service is reachable
    Health,

    /// Inspect or create the configuration file
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),
}

/// Identifier kind as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IdentifierKind {
    /// Email address
    Email,
    /// Username / handle
    Username,
}

impl From<IdentifierKind> for IdentifierType {
    fn from(kind: IdentifierKind) -> Self {
        match kind {
            IdentifierKind::Email => Self::Email,
            IdentifierKind::Username => Self::Username,
        }
    }
}

/// Output format as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Human-readable report
    Text,
    /// Raw scan response as JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Initialize tracing subscriber for logging
pub fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default = if verbose {
        "info,footprint=debug"
    } else {
        "error"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Resolve configuration: file (explicit or default), then environment, then flags.
pub fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => AppConfig::load().context("failed to load config")?,
    };

    config.apply_env_overrides(|key| std::env::var(key).ok());

    if let Some(url) = &cli.api_url {
        config.engine.base_url.clone_from(url);
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}

/// Run a parsed command line.
pub async fn run(cli: Cli) -> Result<ExitCode> {
    tracing::debug!("Starting Footprint v{}", env!("CARGO_PKG_VERSION"));

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();

    match &cli.command {
        Commands::Scan(args) => {
            let config = load_config(&cli)?;
            let engine = engine_for(&config)?;
            let format = args.format.map_or(config.output.format, Into::into);
            commands::scan::run(
                &engine,
                args,
                format,
                &mut stdout.lock(),
                &mut stderr.lock(),
            )
            .await
        }
        Commands::Health => {
            let config = load_config(&cli)?;
            let engine = engine_for(&config)?;
            commands::health::run(&engine, &mut stdout.lock()).await
        }
        Commands::Config(command) => {
            commands::config::run(command, cli.config.as_deref(), &mut stdout.lock())
        }
    }
}

fn engine_for(config: &AppConfig) -> Result<footprint_engine::HttpScanEngine> {
    footprint_engine::HttpScanEngine::from_config(&config.engine)
        .context("failed to create engine client")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scan() {
        let cli = Cli::try_parse_from([
            "footprint",
            "scan",
            "a@b.com",
            "--type",
            "email",
            "--format",
            "json",
            "--api-url",
            "http://127.0.0.1:9000",
        ])
        .expect("parse args");

        assert_eq!(cli.api_url.as_deref(), Some("http://127.0.0.1:9000"));
        let Commands::Scan(args) = cli.command else {
            panic!("expected scan command");
        };
        assert_eq!(args.identifier, "a@b.com");
        assert_eq!(args.identifier_type, Some(IdentifierKind::Email));
        assert_eq!(args.format, Some(FormatArg::Json));
    }

    #[test]
    fn test_parse_scan_defaults() {
        let cli = Cli::try_parse_from(["footprint", "s", "jdoe"]).expect("parse args");
        let Commands::Scan(args) = cli.command else {
            panic!("expected scan command");
        };
        assert_eq!(args.identifier_type, None);
        assert_eq!(args.format, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_rejects_unknown_type() {
        let result = Cli::try_parse_from(["footprint", "scan", "jdoe", "--type", "phone"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_config_subcommands() {
        let cli = Cli::try_parse_from(["footprint", "config", "init", "--force"])
            .expect("parse args");
        assert!(matches!(
            cli.command,
            Commands::Config(commands::config::ConfigCommand::Init { force: true })
        ));
    }

    #[test]
    fn test_load_config_flag_overrides_file() {
        let tmp = tempfile::TempDir::new().expect("create temp dir");
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[engine]\nbase_url = \"http://from-file:8000\"\n")
            .expect("write config");

        let cli = Cli::try_parse_from([
            "footprint",
            "--config",
            path.to_str().expect("utf-8 path"),
            "--api-url",
            "http://from-flag:9000",
            "health",
        ])
        .expect("parse args");

        let config = load_config(&cli).expect("load config");
        assert_eq!(config.engine.base_url, "http://from-flag:9000");
    }

    #[test]
    fn test_load_config_rejects_invalid_url() {
        let tmp = tempfile::TempDir::new().expect("create temp dir");
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[engine]\nbase_url = \"ftp://nope\"\n").expect("write config");

        let cli = Cli::try_parse_from([
            "footprint",
            "--config",
            path.to_str().expect("utf-8 path"),
            "health",
        ])
        .expect("parse args");

        assert!(load_config(&cli).is_err());
    }
}
