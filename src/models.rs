// src/models.rs
use serde::{Deserialize, Serialize};

pub const CONNECT_FAILURE_MESSAGE: &str = "Cannot connect to API";

/// Readiness reported by the translation backend. `Error` is never sent by the
/// backend itself; it marks a check that could not reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Healthy,
    Unhealthy,
    Error,
}

impl std::fmt::Display for HealthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthState::Healthy => write!(f, "healthy"),
            HealthState::Unhealthy => write!(f, "unhealthy"),
            HealthState::Error => write!(f, "error"),
        }
    }
}

/// Body of `GET /health`, kept exactly as the backend sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: HealthState,
    #[serde(default)]
    pub model_loaded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthStatus {
    /// The status recorded when the backend cannot be reached or answers with
    /// something that isn't a health report.
    pub fn unreachable() -> Self {
        Self {
            status: HealthState::Error,
            model_loaded: false,
            device: None,
            error: Some(CONNECT_FAILURE_MESSAGE.to_string()),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == HealthState::Healthy
    }
}

#[derive(Serialize, Debug)]
pub struct TranslateRequest<'a> {
    pub text_ur: &'a str,
}

#[derive(Deserialize, Debug)]
pub struct TranslateResponse {
    pub output_text: String,
}

/// Error body returned on a failed request. `detail` is usually a string but
/// validation failures carry a list, so it is read loosely.
#[derive(Deserialize, Debug, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn detail_text(&self) -> Option<String> {
        match &self.detail {
            Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}

/// Body of `GET /info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub model_architecture: String,
    pub total_parameters: u64,
    pub trainable_parameters: u64,
    pub src_vocab_size: u64,
    pub tgt_vocab_size: u64,
    pub device: String,
    pub framework: String,
}

/// Outcome of one translation: either text to show or an error to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationResult {
    Output(String),
    Error(String),
}
