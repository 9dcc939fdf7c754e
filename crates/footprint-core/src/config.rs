//! Configuration management for Footprint.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Environment variable overriding `engine.base_url`.
pub const ENV_API_URL: &str = "FOOTPRINT_API_URL";

/// Environment variable overriding `engine.timeout_secs`.
pub const ENV_TIMEOUT_SECS: &str = "FOOTPRINT_TIMEOUT_SECS";

/// Environment variable overriding `output.format`.
pub const ENV_OUTPUT_FORMAT: &str = "FOOTPRINT_OUTPUT_FORMAT";

/// Main application configuration.
///
/// This is loaded from `~/.config/footprint/config.toml` (or platform equivalent).
/// If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Scan engine connection settings
    pub engine: EngineConfig,
    /// Report output settings
    pub output: OutputConfig,
}

impl AppConfig {
    /// Load configuration from the default path, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML
    pub fn load() -> ConfigResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit file path.
    ///
    /// Unlike [`AppConfig::load`], a missing file is an error here.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        tracing::debug!("Loading config from {}", path.display());
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from the default path with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `FOOTPRINT_API_URL`: Override the scan engine base URL
    /// - `FOOTPRINT_TIMEOUT_SECS`: Override the request timeout
    /// - `FOOTPRINT_OUTPUT_FORMAT`: Override the output format (text/json)
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply overrides from a variable lookup (normally the process environment).
    ///
    /// Values that fail to parse are ignored and the configured value is kept.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL) {
            tracing::debug!("Override engine.base_url from env: {}", url);
            self.engine.base_url = url;
        }

        if let Some(val) = lookup(ENV_TIMEOUT_SECS) {
            if let Ok(secs) = val.parse() {
                self.engine.timeout_secs = secs;
                tracing::debug!("Override engine.timeout_secs from env: {}", secs);
            }
        }

        if let Some(val) = lookup(ENV_OUTPUT_FORMAT) {
            if let Ok(format) = val.parse() {
                self.output.format = format;
                tracing::debug!("Override output.format from env: {}", format);
            }
        }
    }

    /// Check that the configured values are usable.
    pub fn validate(&self) -> ConfigResult<()> {
        let parsed = url::Url::parse(&self.engine.base_url).map_err(|e| {
            ConfigError::InvalidValue {
                field: "engine.base_url".to_string(),
                reason: e.to_string(),
            }
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                field: "engine.base_url".to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        if self.engine.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "engine.timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// Save configuration to the default path.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> ConfigResult<PathBuf> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    /// Save configuration to an explicit file path.
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        let config_dir = path.parent().ok_or_else(|| ConfigError::InvalidValue {
            field: "config_path".to_string(),
            reason: "no parent directory".to_string(),
        })?;

        fs::create_dir_all(config_dir)?;
        tracing::debug!("Saving config to {}", path.display());

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/footprint/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs =
            ProjectDirs::from("com", "footprint", "footprint").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Scan engine connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Base URL of the scanning service (without the `/api` suffix)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User agent string
    pub user_agent: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 30,
            user_agent: concat!("Footprint/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Report output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default report format
    pub format: OutputFormat,
}

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text report
    #[default]
    Text,
    /// Raw scan response as JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::InvalidValue {
                field: "output.format".to_string(),
                reason: format!("expected 'text' or 'json', got '{other}'"),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}
