use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

use pic2text_config::picker::PickerConfig;
use rfd::AsyncFileDialog;

pub type PickFuture = Pin<Box<dyn Future<Output = Option<PathBuf>> + Send>>;

/// Source of user-chosen image files
pub trait ImagePicker: Send + Sync {
    /// Resolves to `None` when the user picks nothing
    fn pick(&self) -> PickFuture;
}

/// Native file dialog
pub struct DialogPicker {
    config: PickerConfig,
}

impl DialogPicker {
    pub fn new(config: PickerConfig) -> Self {
        Self { config }
    }
}

impl ImagePicker for DialogPicker {
    fn pick(&self) -> PickFuture {
        let config = self.config.clone();
        Box::pin(async move { pick_image(&config).await })
    }
}

/// Ask the user for exactly one image file
///
/// Returns `None` when the dialog is cancelled.
pub async fn pick_image(config: &PickerConfig) -> Option<PathBuf> {
    let mut dialog = AsyncFileDialog::new()
        .set_title("Select an image")
        .add_filter("Images", config.extensions.as_slice());

    if let Some(dir) = &config.start_dir {
        dialog = dialog.set_directory(dir);
    }

    let picked = dialog.pick_file().await.map(|f| f.path().to_path_buf());
    match &picked {
        Some(path) => tracing::info!("Picked {}", path.display()),
        None => tracing::debug!("Picker dismissed without a selection"),
    }
    picked
}
