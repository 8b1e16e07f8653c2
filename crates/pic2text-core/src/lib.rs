pub mod bitmap;
pub mod crop;
pub mod error;
pub mod observe;
pub mod state;

pub use bitmap::SelectedImage;
pub use error::{AcquireError, CropError};
pub use state::{Action, Effect, Phase, Screen};
