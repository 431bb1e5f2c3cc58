// src/api/state.rs
use crate::backend::HttpBackend;
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::config::AppConfig;
use crate::session::Session;
use reqwest::Client;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Session<HttpBackend>>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self::with_clipboard(config, Arc::new(SystemClipboard))
    }

    pub fn with_clipboard(config: AppConfig, clipboard: Arc<dyn Clipboard>) -> Self {
        let backend = HttpBackend::new(Client::new(), config);
        Self {
            session: Arc::new(Session::new(backend, clipboard)),
        }
    }
}
