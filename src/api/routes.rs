// src/api/routes.rs
use actix_web::web;
use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/state", web::get().to(handlers::get_state))
            .route("/input", web::put().to(handlers::set_input))
            .route("/translate", web::post().to(handlers::translate))
            .route("/clear", web::post().to(handlers::clear))
            .route("/error/dismiss", web::post().to(handlers::dismiss_error))
            .route("/copy", web::post().to(handlers::copy_output))
            .route("/health", web::post().to(handlers::refresh_health))
            .route("/info", web::get().to(handlers::model_info))
            .service(
                web::scope("/samples")
                    .route("", web::get().to(handlers::list_samples))
                    .route("/{index}", web::post().to(handlers::load_sample))
            )
    );
}
