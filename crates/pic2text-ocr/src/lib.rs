mod ocr;
mod task;

pub use ocr::{TesseractRecognizer, TextRecognizer};
pub use task::{RecognitionHandle, submit};
