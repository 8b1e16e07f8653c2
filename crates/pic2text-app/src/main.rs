use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use pic2text_config::Config;
use pic2text_io::clipboard::SystemClipboard;
use pic2text_io::picker::DialogPicker;
use pic2text_ocr::TesseractRecognizer;

pub mod context;
pub mod controller;
pub mod events;
pub mod logging;
pub mod profile;
pub mod state;
pub mod ui;


use self::controller::AppController;
use self::state::AppState;

/// Pick an image, crop it, and copy the text inside to the clipboard
#[derive(Parser, Debug)]
#[command(name = "pic2text", version)]
struct Cli {
    /// Image to open at start-up instead of picking one
    image: Option<PathBuf>,

    /// Tesseract language code, e.g. `eng` or `eng+deu`
    #[arg(long)]
    lang: Option<String>,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => profile::load_config(path)?,
        None => Config::new(),
    };
    if let Some(lang) = cli.lang {
        config.ocr.language = lang;
    }

    logging::init(&config);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("pic2text-worker")
        .build()
        .context("Failed to start tokio runtime")?;

    let recognizer = TesseractRecognizer::new(&config.ocr);
    tracing::info!("OCR language: {}", recognizer.language());
    if let Err(e) = recognizer.probe() {
        // Keep going; each recognition will fail and be logged
        tracing::warn!("OCR unavailable: {:#}", e);
    }

    let clipboard = SystemClipboard::spawn()?;
    let picker = Arc::new(DialogPicker::new(config.picker.clone()));
    let state = Arc::new(AppState::new(config, Arc::new(recognizer)));

    let controller = AppController::new(state);
    let mut tasks = {
        let _guard = runtime.enter();
        controller.spawn_tasks(Box::new(clipboard), picker)
    };

    if let Some(path) = cli.image {
        controller.open(path);
    }

    let (app_to_ui_rx, ui_to_app_tx) = controller.ui_channels();
    let ui_result = ui::ui_loop(app_to_ui_rx, ui_to_app_tx);
    if let Err(e) = &ui_result {
        tracing::error!("UI exited with error: {:#}", e);
    }

    controller.shutdown();
    runtime.block_on(async {
        while let Some(result) = tasks.join_next().await {
            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => tracing::warn!("task exited with error: {:#}", e),
                Err(e) => tracing::error!("task panicked: {}", e),
            }
        }
    });
    // Don't wait on a tesseract run nobody will read
    runtime.shutdown_timeout(Duration::from_secs(1));

    ui_result
}
