use std::env;

use serde::{Deserialize, Serialize};

use self::crop::CropConfig;
use self::ocr::OcrConfig;
use self::picker::PickerConfig;

pub mod crop;
pub mod ocr;
pub mod picker;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ocr: OcrConfig,
    pub crop: CropConfig,
    pub picker: PickerConfig,

    /// `EnvFilter` directives; `new()` takes them from `RUST_LOG`, else `info`
    pub log_filter: String,
    pub log_format: LogFormat,
}

impl Config {
    pub fn new() -> Self {
        let log_filter = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let log_format = match env::var("PIC2TEXT_LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Config {
            ocr: OcrConfig::new(),
            crop: CropConfig::new(),
            picker: PickerConfig::new(),

            log_filter,
            log_format,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse an env var, falling back to `default` when unset or malformed
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
