use std::path::{Path, PathBuf};

use image::{ImageReader, RgbaImage};

use crate::error::AcquireError;

/// Decoded source image owned by the screen state
///
/// Pixels are always kept as a software RGBA8 buffer so that the crop and
/// recognition stages get direct pixel access.
#[derive(Debug, Clone)]
pub struct SelectedImage {
    path: Option<PathBuf>,
    pixels: RgbaImage,
}

impl SelectedImage {
    /// Decode the file at `path`, sniffing the format from its contents
    pub fn open(path: &Path) -> Result<Self, AcquireError> {
        let io_err = |source| AcquireError::Io {
            path: path.to_path_buf(),
            source,
        };

        let decoded = ImageReader::open(path)
            .map_err(io_err)?
            .with_guessed_format()
            .map_err(io_err)?
            .decode()
            .map_err(|source| AcquireError::Decode {
                path: path.to_path_buf(),
                source,
            })?;

        if decoded.width() == 0 || decoded.height() == 0 {
            return Err(AcquireError::Empty(path.to_path_buf()));
        }

        tracing::debug!(
            "Decoded {} ({}x{}, {:?})",
            path.display(),
            decoded.width(),
            decoded.height(),
            decoded.color()
        );

        Ok(Self {
            path: Some(path.to_path_buf()),
            pixels: decoded.into_rgba8(),
        })
    }

    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self { path: None, pixels }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut RgbaImage {
        &mut self.pixels
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_open_decodes_to_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.png");
        let source = RgbaImage::from_pixel(6, 4, Rgba([10, 20, 30, 255]));
        source.save(&path).unwrap();

        let mut image = SelectedImage::open(&path).unwrap();
        assert_eq!((image.width(), image.height()), (6, 4));
        assert_eq!(image.path(), Some(path.as_path()));
        assert_eq!(image.pixels().get_pixel(5, 3), &Rgba([10, 20, 30, 255]));

        // Buffer is writable
        image.pixels_mut().put_pixel(0, 0, Rgba([0, 0, 0, 0]));
        assert_eq!(image.pixels().get_pixel(0, 0), &Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_open_guesses_format_from_contents() {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("real.png");
        RgbaImage::new(2, 2).save(&png).unwrap();
        let misnamed = dir.path().join("photo.dat");
        std::fs::copy(&png, &misnamed).unwrap();

        let image = SelectedImage::open(&misnamed).unwrap();
        assert_eq!(image.width(), 2);
    }

    #[test]
    fn test_open_missing_file() {
        let err = SelectedImage::open(Path::new("/definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, AcquireError::Io { .. }));
    }

    #[test]
    fn test_open_garbage_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not an image at all").unwrap();

        let err = SelectedImage::open(&path).unwrap_err();
        assert!(matches!(err, AcquireError::Decode { .. }));
    }
}
