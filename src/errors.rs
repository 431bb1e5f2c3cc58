// src/errors.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to read file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status. `detail` is the string
    /// `detail` field of the error body, when there is one.
    #[error("API request failed with status {status}")]
    Api { status: u16, detail: Option<String> },

    #[error("Unexpected response structure: {0}")]
    UnexpectedResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("A translation is already in progress")]
    TranslationInFlight,

    #[error("Translation API is not available (status: {0})")]
    BackendUnavailable(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
