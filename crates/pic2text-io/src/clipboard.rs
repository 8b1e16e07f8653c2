use std::sync::{Arc, Mutex};
use std::thread;

use anyhow::Context;
use arboard::Clipboard;
use kanal::Sender;

/// Destination for recognized text
pub trait ClipboardSink: Send + Sync {
    fn set_text(&mut self, text: &str) -> anyhow::Result<()>;
}

/// System clipboard owned by a dedicated thread
///
/// The `arboard` handle stays alive for the whole session so that the
/// copied text survives on platforms where the owner must keep serving it.
pub struct SystemClipboard {
    tx: Sender<String>,
}

impl SystemClipboard {
    pub fn spawn() -> anyhow::Result<Self> {
        let (tx, rx) = kanal::bounded::<String>(8);
        let (ready_tx, ready_rx) = kanal::bounded::<Result<(), String>>(1);

        // The arboard handle is created and used on this thread only
        thread::Builder::new()
            .name("clipboard".to_string())
            .spawn(move || {
                let mut clipboard = match Clipboard::new() {
                    Ok(clipboard) => {
                        let _ = ready_tx.send(Ok(()));
                        clipboard
                    }
                    Err(e) => {
                        let _ = ready_tx.send(Err(e.to_string()));
                        return;
                    }
                };

                while let Ok(text) = rx.recv() {
                    match clipboard.set_text(text) {
                        Ok(()) => tracing::debug!("Clipboard updated"),
                        Err(e) => tracing::error!("Failed to write clipboard: {}", e),
                    }
                }
                tracing::debug!("Clipboard thread stopping");
            })
            .context("Failed to spawn clipboard thread")?;

        ready_rx
            .recv()
            .context("Clipboard thread exited during start-up")?
            .map_err(|e| anyhow::anyhow!("Failed to open system clipboard: {e}"))?;

        Ok(Self { tx })
    }
}

impl ClipboardSink for SystemClipboard {
    /// Queues the write; never blocks the caller
    fn set_text(&mut self, text: &str) -> anyhow::Result<()> {
        let queued = self
            .tx
            .try_send(text.to_string())
            .context("Clipboard thread is gone")?;
        if !queued {
            tracing::warn!("Clipboard queue full, dropping {} chars", text.len());
            anyhow::bail!("Clipboard queue is full");
        }
        Ok(())
    }
}

/// In-memory clipboard recording every write
#[derive(Clone, Default)]
pub struct MemoryClipboard {
    writes: Arc<Mutex<Vec<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().map(|w| w.clone()).unwrap_or_default()
    }

    /// Latest text, like reading the clipboard back
    pub fn contents(&self) -> Option<String> {
        self.writes().last().cloned()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> anyhow::Result<()> {
        self.writes
            .lock()
            .map_err(|_| anyhow::anyhow!("clipboard lock poisoned"))?
            .push(text.to_string());
        Ok(())
    }
}
