use std::path::PathBuf;
use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use pic2text_io::clipboard::ClipboardSink;
use pic2text_io::picker::ImagePicker;
use pic2text_types::{AppEvent, UiUpdate};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::context::AppContext;
use crate::events::event_loop;
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<UiUpdate>, AsyncReceiver<UiUpdate>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            app_to_ui: kanal::bounded_async(32),
            ui_to_app: kanal::bounded_async(64), // UI interactions + worker results
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Must be called within a tokio runtime context
    pub fn spawn_tasks(
        &self,
        clipboard: Box<dyn ClipboardSink>,
        picker: Arc<dyn ImagePicker>,
    ) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // Event loop
        let ctx = AppContext::new(
            self.state.clone(),
            self.channels.app_to_ui.0.clone(),
            self.channels.ui_to_app.0.clone(),
            clipboard,
            picker,
        );
        tasks.spawn(event_loop(
            ctx,
            self.channels.ui_to_app.1.clone(),
            // Leaving the loop (Back from an empty screen, window close) ends the app
            self.cancel_token.clone(),
        ));

        // Ctrl+C
        let cancel = self.cancel_token.clone();
        let app_to_ui_tx = self.channels.app_to_ui.0.clone();
        tasks.spawn(async move {
            tokio::select! {
                result = tokio::signal::ctrl_c() => {
                    result?;
                    tracing::info!("Shutdown requested");
                    cancel.cancel();
                    let _ = app_to_ui_tx.send(UiUpdate::Quit).await;
                }
                _ = cancel.cancelled() => {}
            }
            Ok(())
        });

        tasks
    }

    /// Receiver/sender pair for the UI thread
    pub fn ui_channels(&self) -> (AsyncReceiver<UiUpdate>, AsyncSender<AppEvent>) {
        (
            self.channels.app_to_ui.1.clone(),
            self.channels.ui_to_app.0.clone(),
        )
    }

    /// Queue an image to open, as if it had been picked
    pub fn open(&self, path: PathBuf) {
        if let Err(e) = self.channels.ui_to_app.0.try_send(AppEvent::OpenImage(path)) {
            tracing::error!("Failed to queue image: {}", e);
        }
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
