// src/session.rs
//! The UI session: owns the state, runs the health monitor and the
//! translation controller against a backend.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::backend::TranslationBackend;
use crate::clipboard::Clipboard;
use crate::errors::{AppError, Result};
use crate::health;
use crate::models::{HealthStatus, ModelInfo, TranslationResult};
use crate::samples;
use crate::state::{Action, UiState, TRANSLATION_FALLBACK_MESSAGE};

pub struct Session<B> {
    backend: B,
    state: Mutex<UiState>,
    clipboard: Arc<dyn Clipboard>,
}

/// Marks the in-flight request as over when dropped, so the loading flag is
/// reset even if the request future is abandoned halfway.
struct SettleGuard<'a> {
    state: &'a Mutex<UiState>,
}

impl Drop for SettleGuard<'_> {
    fn drop(&mut self) {
        lock(self.state).reduce(Action::Settled);
    }
}

fn lock(state: &Mutex<UiState>) -> MutexGuard<'_, UiState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Text shown for a failed translation: the backend's `detail` when it sent
/// one, otherwise the generic fallback.
pub fn failure_message(error: &AppError) -> String {
    match error {
        AppError::Api { detail: Some(detail), .. } => detail.clone(),
        _ => TRANSLATION_FALLBACK_MESSAGE.to_string(),
    }
}

/// Trims the input and, if anything is left, marks a request as dispatched.
/// Blank input records the validation error instead.
fn begin(state: &mut UiState, raw_input: &str) -> Option<String> {
    let text = raw_input.trim();
    if text.is_empty() {
        state.reduce(Action::ValidationFailed);
        return None;
    }

    state.reduce(Action::Dispatched);
    Some(text.to_string())
}

impl<B: TranslationBackend> Session<B> {
    pub fn new(backend: B, clipboard: Arc<dyn Clipboard>) -> Self {
        Self {
            backend,
            state: Mutex::new(UiState::default()),
            clipboard,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn snapshot(&self) -> UiState {
        lock(&self.state).clone()
    }

    pub fn apply(&self, action: Action) {
        lock(&self.state).reduce(action);
    }

    /// Runs the health monitor once and records its result.
    pub async fn check_health(&self) -> HealthStatus {
        let status = health::check_health(&self.backend).await;
        self.apply(Action::HealthChecked(status.clone()));
        status
    }

    /// Translates `raw_input` and records the outcome. Performs no gating of
    /// its own; see [`Session::submit`] for the entry point the UI uses.
    pub async fn translate(&self, raw_input: &str) {
        let text = {
            let mut state = lock(&self.state);
            begin(&mut state, raw_input)
        };
        let Some(text) = text else {
            log::debug!("Rejected blank translation input");
            return;
        };
        self.run(&text).await;
    }

    /// Translates the current input, refusing while a translation is in
    /// flight or the backend isn't known to be healthy. When `text` is given
    /// it replaces the input first. The input update, the gate check and the
    /// dispatch happen under one lock, so at most one request is ever out and
    /// it always carries the text that was submitted.
    pub async fn submit(&self, text: Option<String>) -> Result<()> {
        let text = {
            let mut state = lock(&self.state);
            if state.is_loading {
                return Err(AppError::TranslationInFlight);
            }
            if let Some(text) = text {
                state.reduce(Action::InputChanged(text));
            }
            if !state.is_healthy() {
                let status = state
                    .health
                    .as_ref()
                    .map_or_else(|| "unknown".to_string(), |h| h.status.to_string());
                return Err(AppError::BackendUnavailable(status));
            }
            let raw = state.input_text.clone();
            begin(&mut state, &raw)
        };

        if let Some(text) = text {
            self.run(&text).await;
        }
        Ok(())
    }

    async fn run(&self, text: &str) {
        let _settle = SettleGuard { state: &self.state };

        let result = match self.backend.translate(text).await {
            Ok(output) => TranslationResult::Output(output),
            Err(e) => {
                log::error!("Translation failed: {}", e);
                TranslationResult::Error(failure_message(&e))
            }
        };

        self.apply(Action::Resolved(result));
    }

    /// Replaces the input with sample `index`. Returns `false` when there is
    /// no such sample.
    pub fn load_sample(&self, index: usize) -> bool {
        match samples::get(index) {
            Some(text) => {
                self.apply(Action::SampleLoaded(text.to_string()));
                true
            }
            None => false,
        }
    }

    /// Copies the current output to the clipboard of the host running the
    /// server. Failures are only logged.
    pub async fn copy_output(&self) {
        let output = lock(&self.state).output_text.clone();
        if output.is_empty() {
            return;
        }

        let clipboard = Arc::clone(&self.clipboard);
        let chars = output.chars().count();
        match tokio::task::spawn_blocking(move || clipboard.set_text(&output)).await {
            Ok(Ok(())) => log::debug!("Copied {} chars to clipboard", chars),
            Ok(Err(e)) => log::error!("Failed to copy text: {}", e),
            Err(e) => log::error!("Clipboard task failed: {}", e),
        }
    }

    pub async fn model_info(&self) -> Result<ModelInfo> {
        self.backend.info().await
    }
}
