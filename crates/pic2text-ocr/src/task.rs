use std::sync::Arc;

use image::RgbaImage;
use pic2text_types::RecognitionOutcome;
use tokio::task::JoinHandle;

use crate::ocr::TextRecognizer;

/// In-flight recognition request
pub struct RecognitionHandle {
    generation: u64,
    task: JoinHandle<RecognitionOutcome>,
}

impl RecognitionHandle {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Stop waiting for the result
    ///
    /// A recognizer already running on the blocking pool finishes in the
    /// background; its result is discarded.
    pub fn abort(&self) {
        self.task.abort();
    }

    /// Resolve into the tagged outcome; panics and aborts become `Failed`
    pub async fn outcome(self) -> RecognitionOutcome {
        match self.task.await {
            Ok(outcome) => outcome,
            Err(e) if e.is_cancelled() => RecognitionOutcome::Failed("cancelled".to_string()),
            Err(e) => RecognitionOutcome::Failed(format!("recognizer panicked: {e}")),
        }
    }
}

/// Run `recognizer` over `image` on the blocking pool
///
/// Must be called from within a tokio runtime.
pub fn submit(
    recognizer: Arc<dyn TextRecognizer>,
    generation: u64,
    image: Arc<RgbaImage>,
) -> RecognitionHandle {
    let task = tokio::task::spawn_blocking(move || match recognizer.recognize(&image) {
        Ok(text) => {
            tracing::debug!(">>> [OCR] #{} got {} chars", generation, text.len());
            RecognitionOutcome::Text(text)
        }
        Err(e) => RecognitionOutcome::Failed(format!("{e:#}")),
    });

    RecognitionHandle { generation, task }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use anyhow::Result;
    use tokio::time::timeout;

    use super::*;

    struct Fixed(&'static str);

    impl TextRecognizer for Fixed {
        fn recognize(&self, _image: &RgbaImage) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct Broken;

    impl TextRecognizer for Broken {
        fn recognize(&self, _image: &RgbaImage) -> Result<String> {
            anyhow::bail!("no language data")
        }
    }

    struct Panics;

    impl TextRecognizer for Panics {
        fn recognize(&self, _image: &RgbaImage) -> Result<String> {
            panic!("boom")
        }
    }

    /// Records the size of every image it sees
    struct Sizes(AtomicUsize);

    impl TextRecognizer for Sizes {
        fn recognize(&self, image: &RgbaImage) -> Result<String> {
            self.0
                .store((image.width() * image.height()) as usize, Ordering::SeqCst);
            Ok(String::new())
        }
    }

    fn blank() -> Arc<RgbaImage> {
        Arc::new(RgbaImage::new(4, 3))
    }

    #[tokio::test]
    async fn test_submit_returns_text() {
        let handle = submit(Arc::new(Fixed("HELLO")), 7, blank());
        assert_eq!(handle.generation(), 7);

        let outcome = timeout(Duration::from_secs(2), handle.outcome())
            .await
            .unwrap();
        assert_eq!(outcome, RecognitionOutcome::Text("HELLO".to_string()));
    }

    #[tokio::test]
    async fn test_submit_tags_failure() {
        let outcome = submit(Arc::new(Broken), 1, blank()).outcome().await;
        assert_eq!(
            outcome,
            RecognitionOutcome::Failed("no language data".to_string())
        );
    }

    #[tokio::test]
    async fn test_panicking_recognizer_does_not_take_down_caller() {
        let outcome = submit(Arc::new(Panics), 1, blank()).outcome().await;
        assert!(matches!(outcome, RecognitionOutcome::Failed(_)));
    }

    #[tokio::test]
    async fn test_recognizer_sees_submitted_image() {
        let recognizer = Arc::new(Sizes(AtomicUsize::new(0)));
        submit(recognizer.clone(), 1, blank()).outcome().await;
        assert_eq!(recognizer.0.load(Ordering::SeqCst), 12);
    }
}
