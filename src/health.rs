// src/health.rs

use crate::backend::TranslationBackend;
use crate::models::HealthStatus;

/// Asks the backend whether it is ready. Never fails: a transport error, a
/// non-2xx status or a body that isn't a health report all come back as
/// [`HealthStatus::unreachable`].
pub async fn check_health<B: TranslationBackend>(backend: &B) -> HealthStatus {
    match backend.health().await {
        Ok(status) => {
            log::info!(
                "Backend health: {} (model_loaded={}, device={})",
                status.status,
                status.model_loaded,
                status.device.as_deref().unwrap_or("n/a")
            );
            status
        }
        Err(e) => {
            log::warn!("Health check failed: {}", e);
            HealthStatus::unreachable()
        }
    }
}
