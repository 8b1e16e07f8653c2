use std::path::PathBuf;

use pic2text_types::CropRect;

#[derive(Debug, thiserror::Error)]
pub enum AcquireError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Image {0} has no pixels")]
    Empty(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CropError {
    #[error("Crop region has zero area")]
    Empty,

    #[error("Crop region {rect:?} lies outside the {width}x{height} image")]
    OutOfBounds {
        rect: CropRect,
        width: u32,
        height: u32,
    },
}
