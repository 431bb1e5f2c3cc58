// src/api/handlers/translate.rs
use actix_web::{web, HttpResponse, Result};
use serde::Deserialize;
use serde_json::json;
use crate::api::AppState;
use crate::errors::AppError;

#[derive(Deserialize)]
pub struct TranslateRequest {
    pub text: String,
}

/// POST /api/v1/translate - translate `{ "text": ... }`, or the stored input
/// when no body is sent
///
/// A failed translation is still a `200`: the error lands in the state view
/// like any other outcome. Only refusals to start one are HTTP errors.
pub async fn translate(
    state: web::Data<AppState>,
    req: Option<web::Json<TranslateRequest>>,
) -> Result<HttpResponse> {
    let text = req.map(|r| r.into_inner().text);
    match state.session.submit(text).await {
        Ok(()) => Ok(HttpResponse::Ok().json(state.session.snapshot().view())),
        Err(e) => {
            log::warn!("Translate refused: {}", e);
            let body = json!({
                "error": e.to_string(),
                "state": state.session.snapshot().view(),
            });
            let response = match e {
                AppError::TranslationInFlight => HttpResponse::Conflict().json(body),
                AppError::BackendUnavailable(_) => HttpResponse::ServiceUnavailable().json(body),
                _ => HttpResponse::InternalServerError().json(body),
            };
            Ok(response)
        }
    }
}
