// src/config.rs
use serde::Deserialize;
use std::path::Path;
use crate::errors::{AppError, Result};

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5173;

/// Environment variable naming a TOML config file. When unset, configuration
/// comes from the plain environment variables instead.
pub const CONFIG_PATH_VAR: &str = "URDU_ROMAN_CONFIG";

/// Application configuration. Loaded once at startup and never changed while
/// the process runs.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the translation backend, without a trailing slash.
    pub api_base: String,
    /// Address the local UI server binds to.
    pub host: String,
    pub port: u16,
}

/// On-disk shape of the config file; every key is optional.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    api_base: Option<String>,
    #[serde(default)]
    host: Option<String>,
    #[serde(default)]
    port: Option<u16>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    /// Loads from the file named by `URDU_ROMAN_CONFIG` if set, otherwise
    /// from environment variables.
    pub fn load() -> Result<Self> {
        match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) => Self::from_file(path),
            Err(_) => Self::from_env(),
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let api_base = std::env::var("TRANSLATOR_API_BASE")
            .unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let host = std::env::var("UI_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match std::env::var("UI_PORT") {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => DEFAULT_PORT,
        };

        Self::build(api_base, host, port)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: FileConfig = toml::from_str(contents)?;
        Self::build(
            file.api_base.unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            file.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            file.port.unwrap_or(DEFAULT_PORT),
        )
    }

    fn build(api_base: String, host: String, port: u16) -> Result<Self> {
        let api_base = api_base.trim().trim_end_matches('/').to_string();
        if !(api_base.starts_with("http://") || api_base.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "API base URL must start with http:// or https://, got '{}'",
                api_base
            )));
        }

        Ok(Self { api_base, host, port })
    }

    /// Full URL of a backend endpoint, e.g. `endpoint("/health")`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

fn parse_port(raw: &str) -> Result<u16> {
    raw.trim()
        .parse::<u16>()
        .map_err(|_| AppError::Config(format!("UI_PORT must be a port number, got '{}'", raw)))
}
