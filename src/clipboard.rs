// src/clipboard.rs

use crate::errors::{AppError, Result};

/// Somewhere the translated text can be copied to.
pub trait Clipboard: Send + Sync {
    fn set_text(&self, text: &str) -> Result<()>;
}

/// The desktop clipboard of the machine running the UI server.
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&self, text: &str) -> Result<()> {
        cli_clipboard::set_contents(text.to_string())
            .map_err(|e| AppError::Clipboard(e.to_string()))
    }
}
