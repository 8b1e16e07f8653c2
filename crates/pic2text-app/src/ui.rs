use kanal::{AsyncReceiver, AsyncSender};
use pic2text_types::{AppEvent, UiUpdate};

pub fn ui_loop(
    app_to_ui_rx: AsyncReceiver<UiUpdate>,
    ui_to_app_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    pic2text_ui::ui_loop(app_to_ui_rx, ui_to_app_tx)
}
