// src/samples.rs
use serde::Serialize;

/// Quick-test inputs offered in the UI.
pub const SAMPLE_TEXTS: [&str; 5] = [
    "کس کی نمود کے لیے شام و سحر ہیں گرم",
    "دل سے نکلے ہیں جو لفظ اثر رکھتے ہیں",
    "محبت کرنے والے کم نہیں",
    "یہ ایک خوبصورت دن ہے",
    "زندگی ایک سفر ہے",
];

const PREVIEW_CHARS: usize = 30;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Sample {
    pub index: usize,
    pub text: &'static str,
    pub preview: String,
}

pub fn get(index: usize) -> Option<&'static str> {
    SAMPLE_TEXTS.get(index).copied()
}

pub fn all() -> Vec<Sample> {
    SAMPLE_TEXTS
        .iter()
        .enumerate()
        .map(|(index, text)| Sample { index, text, preview: preview(text) })
        .collect()
}

/// Button label: the first 30 characters, with `...` when cut.
pub fn preview(text: &str) -> String {
    if text.chars().count() > PREVIEW_CHARS {
        let head: String = text.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}
