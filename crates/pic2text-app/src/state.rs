use std::sync::Arc;

use pic2text_config::Config;
use pic2text_ocr::TextRecognizer;

pub struct AppState {
    pub config: Config,
    pub recognizer: Arc<dyn TextRecognizer>,
}

impl AppState {
    pub fn new(config: Config, recognizer: Arc<dyn TextRecognizer>) -> Self {
        Self { config, recognizer }
    }
}
