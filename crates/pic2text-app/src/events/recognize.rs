use std::sync::Arc;

use image::RgbaImage;
use pic2text_types::AppEvent;

use crate::context::AppContext;

/// Fire-and-forget recognition; the outcome comes back as an event
pub fn spawn_recognition(ctx: &AppContext, generation: u64, image: Arc<RgbaImage>) {
    tracing::debug!(
        ">>> [OCR] Submitting #{} ({}x{})",
        generation,
        image.width(),
        image.height()
    );

    let handle = pic2text_ocr::submit(ctx.state.recognizer.clone(), generation, image);
    let loopback_tx = ctx.loopback_tx.clone();

    tokio::spawn(async move {
        let outcome = handle.outcome().await;
        if let Err(e) = loopback_tx
            .send(AppEvent::RecognitionFinished {
                generation,
                outcome,
            })
            .await
        {
            tracing::debug!(">>> [OCR] Result #{} dropped, app stopped: {}", generation, e);
        }
    });
}
