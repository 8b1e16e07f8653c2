use std::sync::Arc;

use image::RgbaImage;
use pic2text_types::{CropRect, RecognitionOutcome};

use crate::bitmap::SelectedImage;
use crate::crop::{CropSettings, CropSurface};
use crate::observe::Observed;

/// Inputs to the screen state
#[derive(Debug)]
pub enum Action {
    ImageSelected(SelectedImage),
    CropRectChanged(CropRect),
    CopyRequested,
    Recognized {
        generation: u64,
        outcome: RecognitionOutcome,
    },
    Back,
}

/// Side effects the caller must carry out, in order
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ShowImage {
        pixels: RgbaImage,
        crop: CropRect,
        handle_size: f32,
    },
    ClearImage,
    /// Submit `image` to the recognizer and report back with `generation`
    Recognize {
        generation: u64,
        image: Arc<RgbaImage>,
    },
    /// Write to the clipboard
    Publish(String),
    Status(String),
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    ImageLoaded,
    Cropped,
    Recognizing,
    TextPublished,
}

struct Loaded {
    image: SelectedImage,
    surface: CropSurface,
    cropped: Option<Arc<RgbaImage>>,
}

/// Screen state holder
///
/// All mutation goes through [`Screen::apply`]. The clipboard effect is
/// produced only by the recognized-text observer, so it fires once per
/// transition to a new non-empty value.
pub struct Screen {
    settings: CropSettings,
    loaded: Option<Loaded>,
    recognized: Observed<String>,
    generation: u64,
    pending: Option<u64>,
}

impl Screen {
    pub fn new(settings: CropSettings) -> Self {
        Self {
            settings,
            loaded: None,
            recognized: Observed::default(),
            generation: 0,
            pending: None,
        }
    }

    pub fn phase(&self) -> Phase {
        match &self.loaded {
            None => Phase::Idle,
            Some(Loaded { cropped: None, .. }) => Phase::ImageLoaded,
            Some(_) if self.pending.is_some() => Phase::Recognizing,
            Some(_) if !self.recognized.get().is_empty() => Phase::TextPublished,
            Some(_) => Phase::Cropped,
        }
    }

    pub fn image(&self) -> Option<&SelectedImage> {
        self.loaded.as_ref().map(|l| &l.image)
    }

    pub fn cropped(&self) -> Option<&RgbaImage> {
        self.loaded.as_ref()?.cropped.as_deref()
    }

    pub fn crop_rect(&self) -> Option<CropRect> {
        self.loaded.as_ref().map(|l| l.surface.rect())
    }

    pub fn recognized_text(&self) -> &str {
        self.recognized.get()
    }

    pub fn apply(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::ImageSelected(image) => self.select(image),
            Action::CropRectChanged(rect) => {
                match &mut self.loaded {
                    Some(loaded) => loaded.surface.set_rect(rect),
                    None => tracing::debug!("Crop rect change ignored, no image"),
                }
                Vec::new()
            }
            Action::CopyRequested => self.copy(),
            Action::Recognized {
                generation,
                outcome,
            } => self.recognized(generation, outcome),
            Action::Back => self.back(),
        }
    }

    fn select(&mut self, image: SelectedImage) -> Vec<Effect> {
        let surface = CropSurface::new(self.settings, image.width(), image.height());
        let effect = Effect::ShowImage {
            pixels: image.pixels().clone(),
            crop: surface.rect(),
            handle_size: surface.settings().handle_size,
        };

        tracing::info!("Image selected ({}x{})", image.width(), image.height());
        self.loaded = Some(Loaded {
            image,
            surface,
            cropped: None,
        });
        self.pending = None;

        vec![effect]
    }

    fn copy(&mut self) -> Vec<Effect> {
        let Some(loaded) = &mut self.loaded else {
            tracing::debug!("Copy requested without an image");
            return vec![Effect::Status("Pick an image first".to_string())];
        };

        loaded.surface.request();
        match loaded.surface.take_emission(loaded.image.pixels()) {
            Some(Ok(cropped)) => {
                let cropped = Arc::new(cropped);
                loaded.cropped = Some(cropped.clone());

                self.generation += 1;
                self.pending = Some(self.generation);
                tracing::debug!(
                    "Cropped {}x{}, recognition #{}",
                    cropped.width(),
                    cropped.height(),
                    self.generation
                );

                vec![
                    Effect::Status("Recognizing…".to_string()),
                    Effect::Recognize {
                        generation: self.generation,
                        image: cropped,
                    },
                ]
            }
            Some(Err(e)) => {
                tracing::warn!("Crop failed: {}", e);
                vec![Effect::Status(e.to_string())]
            }
            None => Vec::new(),
        }
    }

    fn recognized(&mut self, generation: u64, outcome: RecognitionOutcome) -> Vec<Effect> {
        if self.pending != Some(generation) {
            tracing::debug!("Dropping stale recognition #{}", generation);
            return Vec::new();
        }
        self.pending = None;

        match outcome {
            RecognitionOutcome::Text(text) => {
                let changed = self.recognized.set(text.clone());
                if text.is_empty() {
                    vec![Effect::Status("No text found".to_string())]
                } else if changed {
                    vec![
                        Effect::Publish(text),
                        Effect::Status("Copied to clipboard".to_string()),
                    ]
                } else {
                    vec![Effect::Status("Already copied".to_string())]
                }
            }
            RecognitionOutcome::Failed(e) => {
                tracing::error!("Text recognition failed: {}", e);
                vec![Effect::Status("Recognition failed".to_string())]
            }
        }
    }

    fn back(&mut self) -> Vec<Effect> {
        if self.loaded.take().is_some() {
            self.pending = None;
            tracing::info!("Image discarded");
            vec![Effect::ClearImage]
        } else {
            vec![Effect::Exit]
        }
    }
}
