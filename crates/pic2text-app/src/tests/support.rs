//! Fakes shared by the app's async tests

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use image::{Rgba, RgbaImage};
use pic2text_io::picker::{ImagePicker, PickFuture};
use pic2text_ocr::TextRecognizer;

/// Returns a fixed string and remembers the size of each image it saw
pub struct Fixed {
    text: &'static str,
    pub seen: Mutex<Vec<(u32, u32)>>,
}

impl Fixed {
    pub fn new(text: &'static str) -> Arc<Self> {
        Arc::new(Self {
            text,
            seen: Mutex::new(Vec::new()),
        })
    }
}

impl TextRecognizer for Fixed {
    fn recognize(&self, image: &RgbaImage) -> anyhow::Result<String> {
        self.seen.lock().unwrap().push(image.dimensions());
        Ok(self.text.to_string())
    }
}

pub struct Failing;

impl TextRecognizer for Failing {
    fn recognize(&self, _image: &RgbaImage) -> anyhow::Result<String> {
        anyhow::bail!("model not loaded")
    }
}

/// A picker the user always dismisses
#[derive(Default)]
pub struct Dismissed {
    pub opened: AtomicUsize,
}

impl Dismissed {
    pub fn times_opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }
}

impl ImagePicker for Dismissed {
    fn pick(&self) -> PickFuture {
        self.opened.fetch_add(1, Ordering::SeqCst);
        Box::pin(async { None })
    }
}

/// A picker that always returns the same file
pub struct Chooses(pub PathBuf);

impl ImagePicker for Chooses {
    fn pick(&self) -> PickFuture {
        let path = self.0.clone();
        Box::pin(async move { Some(path) })
    }
}

pub fn write_png(path: &Path, width: u32, height: u32) {
    RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]))
        .save(path)
        .unwrap();
}
