// src/backend/mod.rs

use crate::errors::Result;
use crate::models::{HealthStatus, ModelInfo};

pub mod http;

pub use http::HttpBackend;

/// The remote Urdu → Roman-Urdu translation service.
///
/// The session only talks to the backend through this trait.
pub trait TranslationBackend: Send + Sync {
    /// `GET /health`. Any failure is returned as an error; normalizing it into
    /// a `HealthStatus` is the health monitor's job.
    fn health(&self) -> impl std::future::Future<Output = Result<HealthStatus>> + Send;

    /// `POST /translate` with `{ "text_ur": text }`, returning `output_text`.
    fn translate(&self, text: &str) -> impl std::future::Future<Output = Result<String>> + Send;

    /// `GET /info`.
    fn info(&self) -> impl std::future::Future<Output = Result<ModelInfo>> + Send;
}
