// src/lib.rs
pub mod api;
pub mod backend;
pub mod banner;
pub mod clipboard;
pub mod config;
pub mod errors;
pub mod health;
pub mod models;
pub mod samples;
pub mod session;
pub mod state;
