use image::RgbaImage;
use image::imageops;
use pic2text_config::crop::CropConfig;
use pic2text_types::CropRect;

use crate::error::CropError;

/// Fixed configuration of the crop overlay
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropSettings {
    pub overlay_ratio: f32,
    pub handle_size: f32,
}

impl From<&CropConfig> for CropSettings {
    fn from(config: &CropConfig) -> Self {
        Self {
            overlay_ratio: config.overlay_ratio,
            handle_size: config.handle_size,
        }
    }
}

impl Default for CropSettings {
    fn default() -> Self {
        Self::from(&CropConfig::default())
    }
}

/// Centered rectangle covering `ratio` of each image side, at least 1px
pub fn initial_rect(width: u32, height: u32, ratio: f32) -> CropRect {
    let side = |full: u32| ((full as f32 * ratio).round() as u32).clamp(1.min(full), full);
    let w = side(width);
    let h = side(height);

    CropRect::new((width - w) / 2, (height - h) / 2, w, h)
}

/// Intersect `rect` with the image bounds
pub fn clamp_rect(rect: CropRect, width: u32, height: u32) -> Result<CropRect, CropError> {
    if rect.is_empty() {
        return Err(CropError::Empty);
    }

    let right = rect.right().min(width as u64);
    let bottom = rect.bottom().min(height as u64);

    if rect.x >= width || rect.y >= height || right <= rect.x as u64 || bottom <= rect.y as u64 {
        return Err(CropError::OutOfBounds {
            rect,
            width,
            height,
        });
    }

    Ok(CropRect::new(
        rect.x,
        rect.y,
        (right - rect.x as u64) as u32,
        (bottom - rect.y as u64) as u32,
    ))
}

/// Copy the pixels inside `rect` into a new image
pub fn crop_image(image: &RgbaImage, rect: CropRect) -> Result<RgbaImage, CropError> {
    let rect = clamp_rect(rect, image.width(), image.height())?;
    Ok(imageops::crop_imm(image, rect.x, rect.y, rect.width, rect.height).to_image())
}

/// Edge-triggered "finalize the crop" request
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CropTrigger(bool);

impl CropTrigger {
    pub fn set(&mut self) {
        self.0 = true;
    }

    pub fn is_set(&self) -> bool {
        self.0
    }

    /// Returns whether the trigger was set, clearing it
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.0)
    }
}

/// Crop overlay state for the currently displayed image
#[derive(Debug, Clone)]
pub struct CropSurface {
    settings: CropSettings,
    rect: CropRect,
    trigger: CropTrigger,
}

impl CropSurface {
    pub fn new(settings: CropSettings, width: u32, height: u32) -> Self {
        Self {
            rect: initial_rect(width, height, settings.overlay_ratio),
            settings,
            trigger: CropTrigger::default(),
        }
    }

    pub fn settings(&self) -> &CropSettings {
        &self.settings
    }

    pub fn rect(&self) -> CropRect {
        self.rect
    }

    pub fn set_rect(&mut self, rect: CropRect) {
        self.rect = rect;
    }

    pub fn request(&mut self) {
        self.trigger.set();
    }

    pub fn is_requested(&self) -> bool {
        self.trigger.is_set()
    }

    /// Emit the crop of `image` if a request is pending
    ///
    /// The request is consumed whether or not the crop succeeds.
    pub fn take_emission(&mut self, image: &RgbaImage) -> Option<Result<RgbaImage, CropError>> {
        if !self.trigger.take() {
            return None;
        }
        Some(crop_image(image, self.rect))
    }
}
