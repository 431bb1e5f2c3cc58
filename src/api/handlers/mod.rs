// src/api/handlers/mod.rs
mod health;
mod translate;
mod ui;

pub use health::{model_info, refresh_health};
pub use translate::translate;
pub use ui::{clear, copy_output, dismiss_error, get_state, list_samples, load_sample, set_input};
