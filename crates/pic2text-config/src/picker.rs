use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_extensions() -> Vec<String> {
    ["png", "jpg", "jpeg", "bmp", "gif", "webp", "tif", "tiff"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct PickerConfig {
    /// Directory the dialog opens in
    pub start_dir: Option<PathBuf>,
    /// Extensions accepted by the image filter
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl PickerConfig {
    pub fn new() -> Self {
        let start_dir = env::var("PIC2TEXT_PICKER_DIR").ok().map(PathBuf::from);

        Self {
            start_dir,
            extensions: default_extensions(),
        }
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            start_dir: None,
            extensions: default_extensions(),
        }
    }
}
