use kanal::AsyncSender;
use pic2text_types::AppEvent;

/// Sends UI interactions from slint callbacks (sync context) to the backend
#[derive(Clone)]
pub struct UiBridge {
    ui_to_app_tx: AsyncSender<AppEvent>,
}

impl UiBridge {
    pub fn new(ui_to_app_tx: AsyncSender<AppEvent>) -> Self {
        Self { ui_to_app_tx }
    }

    /// Never blocks the UI thread; drops the event if the backend is saturated
    pub fn emit(&self, event: AppEvent) {
        tracing::debug!("[SLINT] -> {:?}", std::mem::discriminant(&event));
        match self.ui_to_app_tx.try_send(event) {
            Ok(true) => {}
            Ok(false) => tracing::warn!("[SLINT] Backend busy, UI event dropped"),
            Err(e) => tracing::error!("[SLINT] Backend channel closed: {}", e),
        }
    }
}
