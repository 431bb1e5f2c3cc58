// src/api/handlers/ui.rs
use actix_web::{web, HttpResponse, Result};
use serde::Deserialize;
use serde_json::json;
use crate::api::AppState;
use crate::samples;
use crate::state::Action;

#[derive(Deserialize)]
pub struct SetInputRequest {
    pub text: String,
}

fn state_view(state: &AppState) -> HttpResponse {
    HttpResponse::Ok().json(state.session.snapshot().view())
}

/// GET /api/v1/state
pub async fn get_state(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(state_view(&state))
}

/// PUT /api/v1/input
pub async fn set_input(
    state: web::Data<AppState>,
    req: web::Json<SetInputRequest>,
) -> Result<HttpResponse> {
    state.session.apply(Action::InputChanged(req.into_inner().text));
    Ok(state_view(&state))
}

/// POST /api/v1/clear
pub async fn clear(state: web::Data<AppState>) -> Result<HttpResponse> {
    state.session.apply(Action::Cleared);
    Ok(state_view(&state))
}

/// POST /api/v1/error/dismiss
pub async fn dismiss_error(state: web::Data<AppState>) -> Result<HttpResponse> {
    state.session.apply(Action::ErrorDismissed);
    Ok(state_view(&state))
}

/// POST /api/v1/copy - copies to the server host's clipboard; failures are only logged
pub async fn copy_output(state: web::Data<AppState>) -> Result<HttpResponse> {
    state.session.copy_output().await;
    Ok(state_view(&state))
}

/// GET /api/v1/samples
pub async fn list_samples() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({ "samples": samples::all() })))
}

/// POST /api/v1/samples/{index}
pub async fn load_sample(
    state: web::Data<AppState>,
    path: web::Path<usize>,
) -> Result<HttpResponse> {
    let index = path.into_inner();
    if state.session.load_sample(index) {
        Ok(state_view(&state))
    } else {
        Ok(HttpResponse::NotFound().json(json!({
            "error": format!("No sample text at index {}", index)
        })))
    }
}
