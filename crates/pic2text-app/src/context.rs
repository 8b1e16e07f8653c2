use std::sync::Arc;

use kanal::AsyncSender;
use pic2text_io::clipboard::ClipboardSink;
use pic2text_io::picker::ImagePicker;
use pic2text_types::{AppEvent, UiUpdate};

use crate::state::AppState;

/// Everything the event handlers need besides the screen state
pub struct AppContext {
    pub state: Arc<AppState>,
    pub app_to_ui_tx: AsyncSender<UiUpdate>,
    /// Back into our own event queue, for results of detached work
    pub loopback_tx: AsyncSender<AppEvent>,
    pub clipboard: Box<dyn ClipboardSink>,
    pub picker: Arc<dyn ImagePicker>,
}

impl AppContext {
    pub fn new(
        state: Arc<AppState>,
        app_to_ui_tx: AsyncSender<UiUpdate>,
        loopback_tx: AsyncSender<AppEvent>,
        clipboard: Box<dyn ClipboardSink>,
        picker: Arc<dyn ImagePicker>,
    ) -> Self {
        Self {
            state,
            app_to_ui_tx,
            loopback_tx,
            clipboard,
            picker,
        }
    }

    /// Push an update to the window; a closed UI is not an error
    pub async fn notify(&self, update: UiUpdate) {
        if let Err(e) = self.app_to_ui_tx.send(update).await {
            tracing::debug!("UI channel closed, update dropped: {}", e);
        }
    }
}
