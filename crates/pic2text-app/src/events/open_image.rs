use std::path::PathBuf;

use pic2text_core::{AcquireError, Action, Effect, Screen, SelectedImage};
use tokio::task::JoinError;

/// Decode off the event loop's thread, then hand the image to the screen
pub async fn handle_open_image(screen: &mut Screen, path: PathBuf) -> Vec<Effect> {
    tracing::debug!("Decoding {}", path.display());

    let decoded = tokio::task::spawn_blocking(move || SelectedImage::open(&path)).await;
    apply_decoded(screen, decoded)
}

/// A failed or panicked decode is reported; the loaded image stays
fn apply_decoded(
    screen: &mut Screen,
    decoded: Result<Result<SelectedImage, AcquireError>, JoinError>,
) -> Vec<Effect> {
    match decoded {
        Ok(Ok(image)) => screen.apply(Action::ImageSelected(image)),
        Ok(Err(e)) => {
            tracing::error!("Failed to load image: {}", e);
            vec![Effect::Status(format!("Could not open image: {e}"))]
        }
        Err(e) => {
            tracing::error!("Image decode task failed: {}", e);
            vec![Effect::Status(format!("Could not open image: {e}"))]
        }
    }
}
