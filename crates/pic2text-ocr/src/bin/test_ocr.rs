//! Run OCR over an image file - run with: cargo run -p pic2text-ocr --bin test_ocr -- <image>

use std::sync::Arc;

use anyhow::{Context, Result};
use pic2text_config::ocr::OcrConfig;
use pic2text_ocr::{TesseractRecognizer, TextRecognizer};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let path = std::env::args()
        .nth(1)
        .context("usage: test_ocr <image>")?;

    let recognizer = TesseractRecognizer::new(&OcrConfig::new());
    recognizer.probe()?;

    let image = image::open(&path)
        .with_context(|| format!("Failed to open {path}"))?
        .into_rgba8();
    tracing::info!("{}: {}x{}", path, image.width(), image.height());

    let start = std::time::Instant::now();
    let recognizer: Arc<dyn TextRecognizer> = Arc::new(recognizer);
    let outcome = pic2text_ocr::submit(recognizer, 1, Arc::new(image))
        .outcome()
        .await;
    tracing::info!("Recognition took {:?}", start.elapsed());

    println!("{outcome:?}");
    Ok(())
}

