//! `footprint config`

use anyhow::{bail, Context, Result};
use clap::Subcommand;
use footprint_core::AppConfig;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => AppConfig::config_path().context("failed to determine config path"),
    }
}

/// Run a config subcommand against `explicit` or the default config path.
pub fn run(command: &ConfigCommand, explicit: Option<&Path>, out: &mut impl Write) -> Result<ExitCode> {
    let path = resolve_path(explicit)?;

    match command {
        ConfigCommand::Show => {
            let mut config = if path.exists() {
                AppConfig::load_from(&path)
                    .with_context(|| format!("failed to load config from {}", path.display()))?
            } else {
                AppConfig::default()
            };
            config.apply_env_overrides(|key| std::env::var(key).ok());
            write!(out, "{}", toml::to_string_pretty(&config)?)?;
        }
        ConfigCommand::Path => {
            writeln!(out, "{}", path.display())?;
        }
        ConfigCommand::Init { force } => {
            if path.exists() && !force {
                bail!(
                    "config file already exists at {} (use --force to overwrite)",
                    path.display()
                );
            }
            AppConfig::default()
                .save_to(&path)
                .with_context(|| format!("failed to write config to {}", path.display()))?;
            writeln!(out, "Wrote default configuration to {}", path.display())?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_then_show() {
        let tmp = TempDir::new().expect("create temp dir");
        let path = tmp.path().join("footprint").join("config.toml");

        let mut out = Vec::new();
        run(&ConfigCommand::Init { force: false }, Some(&path), &mut out).expect("init");
        assert!(path.exists());

        let mut out = Vec::new();
        run(&ConfigCommand::Show, Some(&path), &mut out).expect("show");
        let text = String::from_utf8(out).expect("utf-8");
        assert!(text.contains("[engine]"));
        assert!(text.contains("timeout_secs = 30"));
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let tmp = TempDir::new().expect("create temp dir");
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[engine]\ntimeout_secs = 5\n").expect("write config");

        let mut out = Vec::new();
        let err = run(&ConfigCommand::Init { force: false }, Some(&path), &mut out)
            .expect_err("existing file");
        assert!(err.to_string().contains("already exists"));

        run(&ConfigCommand::Init { force: true }, Some(&path), &mut out).expect("forced init");
        let loaded = AppConfig::load_from(&path).expect("load config");
        assert_eq!(loaded.engine.timeout_secs, 30);
    }

    #[test]
    fn test_path() {
        let mut out = Vec::new();
        run(&ConfigCommand::Path, Some(Path::new("/tmp/fp.toml")), &mut out).expect("path");
        assert_eq!(String::from_utf8(out).expect("utf-8"), "/tmp/fp.toml\n");
    }
}
