use pic2text_types::AppEvent;

use crate::context::AppContext;

/// Open the picker without blocking the event loop
///
/// A dismissed picker produces no event, so the current state is left as is.
pub fn handle_pick_image(ctx: &AppContext) {
    let pick = ctx.picker.pick();
    let loopback_tx = ctx.loopback_tx.clone();

    tokio::spawn(async move {
        match pick.await {
            Some(path) => {
                if let Err(e) = loopback_tx.send(AppEvent::OpenImage(path)).await {
                    tracing::error!("Failed to send picked image to app: {}", e);
                }
            }
            None => tracing::debug!("Picker dismissed, nothing selected"),
        }
    });
}
