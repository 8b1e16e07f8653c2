use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::env_or;

fn default_overlay_ratio() -> f32 {
    0.4
}

fn default_handle_size() -> f32 {
    80.0
}

/// Anything outside (0, 1] would place the overlay off the image
fn valid_ratio(ratio: f32) -> bool {
    ratio > 0.0 && ratio <= 1.0
}

fn deserialize_ratio<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f32, D::Error> {
    let ratio = f32::deserialize(deserializer)?;
    if valid_ratio(ratio) {
        Ok(ratio)
    } else {
        Err(de::Error::custom(format!(
            "overlay_ratio must be in (0, 1], got {ratio}"
        )))
    }
}

/// Crop overlay geometry; the overlay is always a rectangle and never zooms
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct CropConfig {
    /// Initial overlay side length relative to the image side
    #[serde(
        default = "default_overlay_ratio",
        deserialize_with = "deserialize_ratio"
    )]
    pub overlay_ratio: f32,
    /// Hit area of the resize handle, logical px
    #[serde(default = "default_handle_size")]
    pub handle_size: f32,
}

impl CropConfig {
    pub fn new() -> Self {
        let overlay_ratio = env_or("PIC2TEXT_CROP_OVERLAY_RATIO", default_overlay_ratio());

        Self {
            overlay_ratio: if valid_ratio(overlay_ratio) {
                overlay_ratio
            } else {
                default_overlay_ratio()
            },
            handle_size: env_or("PIC2TEXT_CROP_HANDLE_SIZE", default_handle_size()),
        }
    }
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            overlay_ratio: default_overlay_ratio(),
            handle_size: default_handle_size(),
        }
    }
}
