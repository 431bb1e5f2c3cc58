// src/state.rs
//! UI state and the reducer that is the only way to change it.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{HealthState, HealthStatus, TranslationResult};

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some Urdu text to translate";
pub const TRANSLATION_FALLBACK_MESSAGE: &str =
    "Translation failed. Please check if the API server is running.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    pub input_text: String,
    pub output_text: String,
    pub is_loading: bool,
    /// Empty means no error banner.
    pub error_message: String,
    /// `None` until the first health check resolves.
    pub health: Option<HealthStatus>,
    pub health_checked_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    InputChanged(String),
    /// A sample text was picked: replaces the input and drops the error.
    SampleLoaded(String),
    Cleared,
    ErrorDismissed,
    HealthChecked(HealthStatus),
    ValidationFailed,
    /// A translation request is about to go out.
    Dispatched,
    Resolved(TranslationResult),
    /// The in-flight request is over, whatever happened to it.
    Settled,
}

impl UiState {
    pub fn reduce(&mut self, action: Action) {
        match action {
            Action::InputChanged(text) => self.input_text = text,
            Action::SampleLoaded(text) => {
                self.input_text = text;
                self.error_message.clear();
            }
            Action::Cleared => {
                self.input_text.clear();
                self.output_text.clear();
                self.error_message.clear();
            }
            Action::ErrorDismissed => self.error_message.clear(),
            Action::HealthChecked(status) => {
                self.health = Some(status);
                self.health_checked_at = Some(Utc::now());
            }
            Action::ValidationFailed => self.error_message = EMPTY_INPUT_MESSAGE.to_string(),
            Action::Dispatched => {
                self.is_loading = true;
                self.error_message.clear();
                self.output_text.clear();
            }
            Action::Resolved(TranslationResult::Output(text)) => {
                self.output_text = text;
                self.error_message.clear();
            }
            Action::Resolved(TranslationResult::Error(message)) => {
                self.error_message = message;
                self.output_text.clear();
            }
            Action::Settled => self.is_loading = false,
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.health.as_ref().is_some_and(HealthStatus::is_healthy)
    }

    /// Whether the translate button would be enabled.
    pub fn can_translate(&self) -> bool {
        self.is_healthy() && !self.is_loading && !self.input_text.trim().is_empty()
    }

    pub fn status_label(&self) -> String {
        let Some(health) = &self.health else {
            return "Disconnected".to_string();
        };

        let label = match health.status {
            HealthState::Healthy => "Connected",
            HealthState::Unhealthy => "Unhealthy",
            HealthState::Error => "Disconnected",
        };

        match &health.device {
            Some(device) => format!("{} ({})", label, device),
            None => label.to_string(),
        }
    }

    pub fn view(&self) -> StateView {
        StateView {
            input_text: self.input_text.clone(),
            output_text: self.output_text.clone(),
            is_loading: self.is_loading,
            error_message: (!self.error_message.is_empty()).then(|| self.error_message.clone()),
            health: self.health.clone(),
            health_checked_at: self.health_checked_at,
            status_label: self.status_label(),
            char_count: self.input_text.chars().count(),
            can_translate: self.can_translate(),
            can_clear: !self.input_text.is_empty() || !self.output_text.is_empty(),
        }
    }
}

/// What the page renders.
#[derive(Debug, Clone, Serialize)]
pub struct StateView {
    pub input_text: String,
    pub output_text: String,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub health: Option<HealthStatus>,
    pub health_checked_at: Option<DateTime<Utc>>,
    pub status_label: String,
    pub char_count: usize,
    pub can_translate: bool,
    pub can_clear: bool,
}
