//! The controller's task set driven through the same channels the window uses

use std::sync::Arc;
use std::time::Duration;

use kanal::AsyncReceiver;
use pic2text_config::Config;
use pic2text_io::clipboard::MemoryClipboard;
use pic2text_types::{AppEvent, CropRect, UiUpdate};
use pic2text_ui::bridge::UiBridge;
use tokio::task::JoinSet;
use tokio::time::timeout;

use crate::controller::AppController;
use crate::state::AppState;

use super::support::{Dismissed, Fixed, write_png};

fn controller(text: &'static str) -> AppController {
    let state = Arc::new(AppState::new(Config::default(), Fixed::new(text)));
    AppController::new(state)
}

async fn next_matching(
    rx: &AsyncReceiver<UiUpdate>,
    matches: impl Fn(&UiUpdate) -> bool,
) -> UiUpdate {
    loop {
        let update = timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("timed out waiting for UI update")
            .expect("UI channel closed");
        if matches(&update) {
            return update;
        }
    }
}

async fn join_all(mut tasks: JoinSet<anyhow::Result<()>>) {
    timeout(Duration::from_secs(2), async {
        while let Some(result) = tasks.join_next().await {
            result.expect("task panicked").expect("task failed");
        }
    })
    .await
    .expect("tasks did not stop");
}

#[tokio::test]
async fn test_open_then_copy_from_window_reaches_clipboard() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.png");
    write_png(&path, 200, 100);

    let clipboard = MemoryClipboard::new();
    let controller = controller("HELLO");
    let tasks = controller.spawn_tasks(
        Box::new(clipboard.clone()),
        Arc::new(Dismissed::default()),
    );
    let (app_to_ui_rx, ui_to_app_tx) = controller.ui_channels();
    let bridge = UiBridge::new(ui_to_app_tx);

    controller.open(path);
    match next_matching(&app_to_ui_rx, |u| matches!(u, UiUpdate::ShowImage { .. })).await {
        UiUpdate::ShowImage { width, height, .. } => assert_eq!((width, height), (200, 100)),
        _ => unreachable!(),
    }

    bridge.emit(AppEvent::CropRectChanged(CropRect::new(0, 0, 100, 50)));
    bridge.emit(AppEvent::CopyRequested);
    next_matching(&app_to_ui_rx, |u| matches!(u, UiUpdate::RecognizedText(_))).await;
    assert_eq!(clipboard.writes(), vec!["HELLO"]);

    controller.shutdown();
    join_all(tasks).await;
}

#[tokio::test]
async fn test_back_from_empty_window_stops_every_task() {
    let controller = controller("unused");
    let tasks = controller.spawn_tasks(
        Box::new(MemoryClipboard::new()),
        Arc::new(Dismissed::default()),
    );
    let (app_to_ui_rx, ui_to_app_tx) = controller.ui_channels();

    UiBridge::new(ui_to_app_tx).emit(AppEvent::Back);
    next_matching(&app_to_ui_rx, |u| matches!(u, UiUpdate::Quit)).await;

    // No explicit shutdown: the event loop's exit cancels the rest
    join_all(tasks).await;
}

#[tokio::test]
async fn test_window_close_stops_every_task() {
    let controller = controller("unused");
    let tasks = controller.spawn_tasks(
        Box::new(MemoryClipboard::new()),
        Arc::new(Dismissed::default()),
    );
    let (_app_to_ui_rx, ui_to_app_tx) = controller.ui_channels();

    UiBridge::new(ui_to_app_tx).emit(AppEvent::Close);
    join_all(tasks).await;
}
