// src/api/handlers/health.rs
use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use crate::api::AppState;
use crate::errors::AppError;

/// POST /api/v1/health - re-run the backend health check
pub async fn refresh_health(state: web::Data<AppState>) -> Result<HttpResponse> {
    state.session.check_health().await;
    Ok(HttpResponse::Ok().json(state.session.snapshot().view()))
}

/// GET /api/v1/info - model details reported by the backend
pub async fn model_info(state: web::Data<AppState>) -> Result<HttpResponse> {
    match state.session.model_info().await {
        Ok(info) => Ok(HttpResponse::Ok().json(info)),
        Err(e) => {
            log::error!("Failed to fetch model info: {}", e);
            let message = match &e {
                AppError::Api { detail: Some(detail), .. } => detail.clone(),
                _ => e.to_string(),
            };
            Ok(HttpResponse::BadGateway().json(json!({ "error": message })))
        }
    }
}
