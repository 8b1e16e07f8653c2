use kanal::{AsyncReceiver, AsyncSender};
use pic2text_types::{AppEvent, CropRect, UiUpdate};
use slint::ComponentHandle;

pub mod bridge;
pub mod events;

use bridge::UiBridge;
use events::handle_update;

slint::include_modules!();

/// Run the window on the current thread until it closes
///
/// Must be called from the main thread.
pub fn ui_loop(
    app_to_ui_rx: AsyncReceiver<UiUpdate>,
    ui_to_app_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let window = MainWindow::new()?;

    let bridge = UiBridge::new(ui_to_app_tx);

    {
        let bridge = bridge.clone();
        window.on_pick_image(move || bridge.emit(AppEvent::PickImage));
    }
    {
        let bridge = bridge.clone();
        window.on_copy(move || bridge.emit(AppEvent::CopyRequested));
    }
    {
        let bridge = bridge.clone();
        window.on_back(move || bridge.emit(AppEvent::Back));
    }
    {
        let bridge = bridge.clone();
        window.on_crop_changed(move |x, y, width, height| {
            let to_px = |v: i32| v.max(0) as u32;
            bridge.emit(AppEvent::CropRectChanged(CropRect::new(
                to_px(x),
                to_px(y),
                to_px(width),
                to_px(height),
            )));
        });
    }
    {
        let bridge = bridge.clone();
        window.window().on_close_requested(move || {
            bridge.emit(AppEvent::Close);
            slint::CloseRequestResponse::HideWindow
        });
    }

    // Apply backend updates on the UI thread
    {
        let window_weak = window.as_weak();
        slint::spawn_local(async move {
            while let Ok(update) = app_to_ui_rx.recv().await {
                handle_update(update, &window_weak);
            }
            tracing::debug!("[SLINT] Backend channel closed");
        })?;
    }

    window.run()?;

    Ok(())
}
