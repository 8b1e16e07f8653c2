use serde::{Deserialize, Serialize};

use crate::env_or;

fn default_language() -> String {
    "eng".to_string()
}

fn default_psm() -> i32 {
    3
}

fn default_dpi() -> i32 {
    150
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OcrConfig {
    /// Tesseract language code; `eng` covers general Latin script
    #[serde(default = "default_language")]
    pub language: String,
    /// Page segmentation mode
    #[serde(default = "default_psm")]
    pub psm: i32,
    #[serde(default = "default_dpi")]
    pub dpi: i32,
}

impl OcrConfig {
    pub fn new() -> Self {
        Self {
            language: env_or("PIC2TEXT_OCR_LANG", default_language()),
            psm: env_or("PIC2TEXT_OCR_PSM", default_psm()),
            dpi: env_or("PIC2TEXT_OCR_DPI", default_dpi()),
        }
    }
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            psm: default_psm(),
            dpi: default_dpi(),
        }
    }
}
