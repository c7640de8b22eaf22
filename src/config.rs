use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Log level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Renderer configuration stored as JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default log level when RUST_LOG is not set
    pub log_level: LogLevel,
    /// Whether to write logs to file
    pub log_to_file: bool,
    /// Maximum number of log files to keep
    pub log_max_files: usize,
    /// Quote and escape every interpolated value
    pub escape_values: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_to_file: false,
            log_max_files: 5,
            escape_values: false,
        }
    }
}

impl AppConfig {
    /// Get the config file path (~/.appnotif/config.json)
    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::app_dir()?.join("config.json"))
    }

    /// Get the log directory path (~/.appnotif/logs)
    pub fn log_dir() -> PathBuf {
        Self::app_dir()
            .unwrap_or_else(|_| PathBuf::from(".appnotif"))
            .join("logs")
    }

    fn app_dir() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to get user home directory")?;
        Ok(home_dir.join(".appnotif"))
    }

    /// Load configuration from the specified path, using defaults for missing fields
    pub fn load_from_path(path: &Path) -> Result<AppConfig> {
        if !path.exists() {
            tracing::debug!(target: "config", path = %path.display(), "Config file not found, using defaults");
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(path).context("Failed to read config file")?;

        // serde's #[serde(default)] handles missing fields automatically
        let config: AppConfig =
            serde_json::from_str(&content).context("Failed to parse config file")?;

        tracing::debug!(target: "config", path = %path.display(), "Loaded configuration from file");

        Ok(config)
    }
}
