use pic2text_types::UiUpdate;
use slint::{ComponentHandle, Image, Rgba8Pixel, SharedPixelBuffer, Weak};

use crate::MainWindow;

pub fn handle_update(update: UiUpdate, window_weak: &Weak<MainWindow>) {
    let Some(w) = window_weak.upgrade() else {
        return;
    };

    match update {
        UiUpdate::ShowImage {
            width,
            height,
            pixels,
            crop,
            handle_size,
        } => {
            tracing::debug!("[SLINT] Showing {}x{} image", width, height);
            let buffer = SharedPixelBuffer::<Rgba8Pixel>::clone_from_slice(&pixels, width, height);
            w.set_source(Image::from_rgba8(buffer));
            w.set_image_width(width as i32);
            w.set_image_height(height as i32);
            w.set_crop_x(crop.x as i32);
            w.set_crop_y(crop.y as i32);
            w.set_crop_width(crop.width as i32);
            w.set_crop_height(crop.height as i32);
            w.set_handle_size(handle_size);
            w.set_has_image(true);
            w.set_status("Drag the box over the text, then Copy".into());
        }
        UiUpdate::ClearImage => {
            tracing::debug!("[SLINT] Image cleared");
            w.set_has_image(false);
            w.set_source(Image::default());
            w.set_status("Pick an image with +".into());
        }
        UiUpdate::Status(status) => {
            w.set_status(status.into());
        }
        UiUpdate::RecognizedText(text) => {
            tracing::debug!("[SLINT] Recognized text: {} chars", text.len());
            w.set_recognized_text(text.into());
        }
        UiUpdate::Quit => {
            let _ = w.hide();
            slint::quit_event_loop().ok();
        }
    }
}
