// src/api/mod.rs
pub mod assets;
pub mod handlers;
pub mod routes;
pub mod state;

pub use assets::static_file_handler;
pub use routes::configure_routes;
pub use state::AppState;
