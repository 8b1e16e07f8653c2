use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Events flowing from the UI (and the app's own workers) into the event loop
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// "+" button: open the picker
    PickImage,
    /// Load a specific file, bypassing the picker (CLI argument)
    OpenImage(PathBuf),
    /// User moved or resized the crop overlay
    CropRectChanged(CropRect),
    /// "Copy" button: finalize the crop and recognize it
    CopyRequested,
    /// Worker finished a recognition request
    RecognitionFinished {
        generation: u64,
        outcome: RecognitionOutcome,
    },
    Back,
    Close,
}

/// Updates pushed from the event loop to the UI thread
#[derive(Debug, Clone)]
pub enum UiUpdate {
    ShowImage {
        width: u32,
        height: u32,
        /// RGBA8, row-major
        pixels: Vec<u8>,
        crop: CropRect,
        /// Hit area of the resize handle, logical px
        handle_size: f32,
    },
    ClearImage,
    Status(String),
    RecognizedText(String),
    Quit,
}

/// Result of one recognition request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionOutcome {
    Text(String),
    Failed(String),
}

/// Axis-aligned crop rectangle in image pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Right edge, exclusive
    pub fn right(&self) -> u64 {
        self.x as u64 + self.width as u64
    }

    /// Bottom edge, exclusive
    pub fn bottom(&self) -> u64 {
        self.y as u64 + self.height as u64
    }
}
