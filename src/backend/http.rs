// src/backend/http.rs

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Instant;

use crate::backend::TranslationBackend;
use crate::config::AppConfig;
use crate::errors::{AppError, Result};
use crate::models::{ErrorBody, HealthStatus, ModelInfo, TranslateRequest, TranslateResponse};

/// Talks to the translation service over HTTP/JSON.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    config: AppConfig,
}

impl HttpBackend {
    /// Creates a new `HttpBackend`. No request deadline is set beyond the
    /// transport defaults.
    pub fn new(client: Client, config: AppConfig) -> Self {
        Self { client, config }
    }
}

/// Turns a response into `T`, or into `AppError::Api` carrying the body's
/// `detail` string for non-2xx statuses. A 2xx body that doesn't match `T` is
/// an `UnexpectedResponse`.
async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T> {
    let status = resp.status();

    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.detail_text());
        log::debug!("Backend error body ({}): {}", status, body);
        return Err(AppError::Api {
            status: status.as_u16(),
            detail,
        });
    }

    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| AppError::UnexpectedResponse(e.to_string()))
}

impl TranslationBackend for HttpBackend {
    async fn health(&self) -> Result<HealthStatus> {
        let url = self.config.endpoint("/health");
        log::debug!("Checking backend health at {}", url);

        let resp = self.client.get(&url).send().await?;
        read_json(resp).await
    }

    async fn translate(&self, text: &str) -> Result<String> {
        let url = self.config.endpoint("/translate");
        log::info!("Calling translation API: {} ({} chars)", url, text.chars().count());

        let start = Instant::now();
        let resp = self
            .client
            .post(&url)
            .json(&TranslateRequest { text_ur: text })
            .send()
            .await?;

        let status = resp.status();
        let latency_ms = start.elapsed().as_millis() as u64;
        log::info!("Translation API response status: {} ({}ms)", status, latency_ms);

        let body: TranslateResponse = read_json(resp).await?;
        Ok(body.output_text)
    }

    async fn info(&self) -> Result<ModelInfo> {
        let url = self.config.endpoint("/info");
        let resp = self.client.get(&url).send().await?;
        read_json(resp).await
    }
}
