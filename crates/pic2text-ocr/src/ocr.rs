use std::collections::HashMap;

use anyhow::Result;
use image::{DynamicImage, RgbaImage};
use pic2text_config::ocr::OcrConfig;
use rusty_tesseract::{Args, Image};

/// Blocking text recognizer
///
/// Implementations return the full recognized text as one string; no
/// line or word structure is exposed.
pub trait TextRecognizer: Send + Sync {
    fn recognize(&self, image: &RgbaImage) -> Result<String>;
}

/// Recognizer backed by the system `tesseract` binary
pub struct TesseractRecognizer {
    args: Args,
}

impl TesseractRecognizer {
    pub fn new(config: &OcrConfig) -> Self {
        let args = Args {
            lang: config.language.clone(),
            config_variables: HashMap::new(),
            dpi: Some(config.dpi),
            psm: Some(config.psm),
            oem: Some(3), // Default OCR Engine Mode
        };

        Self { args }
    }

    pub fn language(&self) -> &str {
        &self.args.lang
    }

    /// Check that tesseract is installed and knows the configured language
    pub fn probe(&self) -> Result<()> {
        let version = rusty_tesseract::get_tesseract_version()
            .map_err(|e| anyhow::anyhow!("tesseract binary not found: {e}"))?;
        let languages = rusty_tesseract::get_tesseract_langs()
            .map_err(|e| anyhow::anyhow!("Failed to list tesseract languages: {e}"))?;

        tracing::info!("tesseract {} ({} languages)", version.trim(), languages.len());

        anyhow::ensure!(
            self.args
                .lang
                .split('+')
                .all(|lang| languages.iter().any(|l| l == lang)),
            "tesseract has no data for language '{}'",
            self.args.lang
        );
        Ok(())
    }
}

impl TextRecognizer for TesseractRecognizer {
    fn recognize(&self, image: &RgbaImage) -> Result<String> {
        tracing::debug!(
            "Running tesseract ({}) on {}x{} image",
            self.args.lang,
            image.width(),
            image.height()
        );

        // Rotation is always 0; the image goes in exactly as cropped
        let dynamic = DynamicImage::ImageRgba8(image.clone());
        let tess_image = Image::from_dynamic_image(&dynamic)
            .map_err(|e| anyhow::anyhow!("Failed to create tesseract image: {e}"))?;

        let text = rusty_tesseract::image_to_string(&tess_image, &self.args)
            .map_err(|e| anyhow::anyhow!("tesseract failed: {e}"))?;

        Ok(text.trim().to_string())
    }
}
