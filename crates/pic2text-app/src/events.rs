use kanal::AsyncReceiver;
use pic2text_core::crop::CropSettings;
use pic2text_core::{Action, Screen};
use pic2text_types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::context::AppContext;

pub mod effects;
pub mod open_image;
pub mod pick_image;
pub mod recognize;

use effects::{Flow, run_effects};
use open_image::handle_open_image;
use pick_image::handle_pick_image;

/// App's main loop
///
/// Owns the screen state; every mutation happens on this task, one event
/// at a time.
pub async fn event_loop(
    mut ctx: AppContext,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut screen = Screen::new(CropSettings::from(&ctx.state.config.crop));

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                break;
            }
            event = ui_to_app_rx.recv() => event?,
        };

        if handle_events(&mut ctx, &mut screen, event).await? == Flow::Exit {
            tracing::info!("[EVENT_LOOP] Exit requested");
            cancel.cancel();
            break;
        }
    }

    Ok(())
}

async fn handle_events(
    ctx: &mut AppContext,
    screen: &mut Screen,
    event: AppEvent,
) -> anyhow::Result<Flow> {
    tracing::debug!(">>> HANDLING EVENT {:?} <<<", std::mem::discriminant(&event));

    let effects = match event {
        AppEvent::PickImage => {
            handle_pick_image(ctx);
            Vec::new()
        }
        AppEvent::OpenImage(path) => handle_open_image(screen, path).await,
        AppEvent::CropRectChanged(rect) => screen.apply(Action::CropRectChanged(rect)),
        AppEvent::CopyRequested => screen.apply(Action::CopyRequested),
        AppEvent::RecognitionFinished {
            generation,
            outcome,
        } => screen.apply(Action::Recognized {
            generation,
            outcome,
        }),
        AppEvent::Back => screen.apply(Action::Back),
        AppEvent::Close => return Ok(Flow::Exit),
    };

    Ok(run_effects(ctx, effects).await)
}
