use pic2text_core::Effect;
use pic2text_types::UiUpdate;

use crate::context::AppContext;

use super::recognize::spawn_recognition;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Carry out the screen's effects in order
pub async fn run_effects(ctx: &mut AppContext, effects: Vec<Effect>) -> Flow {
    for effect in effects {
        match effect {
            Effect::ShowImage {
                pixels,
                crop,
                handle_size,
            } => {
                let (width, height) = pixels.dimensions();
                ctx.notify(UiUpdate::ShowImage {
                    width,
                    height,
                    pixels: pixels.into_raw(),
                    crop,
                    handle_size,
                })
                .await;
            }
            Effect::ClearImage => ctx.notify(UiUpdate::ClearImage).await,
            Effect::Recognize { generation, image } => spawn_recognition(ctx, generation, image),
            Effect::Publish(text) => {
                match ctx.clipboard.set_text(&text) {
                    Ok(()) => tracing::info!("Copied {} chars to clipboard", text.len()),
                    Err(e) => tracing::error!("Failed to copy to clipboard: {:#}", e),
                }
                ctx.notify(UiUpdate::RecognizedText(text)).await;
            }
            Effect::Status(status) => ctx.notify(UiUpdate::Status(status)).await,
            Effect::Exit => {
                ctx.notify(UiUpdate::Quit).await;
                return Flow::Exit;
            }
        }
    }

    Flow::Continue
}
