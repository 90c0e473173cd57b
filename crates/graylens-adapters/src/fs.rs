//! Filesystem adapters for loading and exporting images.

use std::path::Path;

use graylens_core::{Error, ImageExporter, ImageLoader, LumaBuffer, Result};
use image::{GenericImageView, ImageFormat};
use tracing::debug;

/// Supported input extensions.
const RASTER_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "tiff", "tif", "webp", "bmp", "gif",
];

/// Decodes raster files from disk with the `image` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsImageLoader;

impl FsImageLoader {
    /// Creates a new loader.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ImageLoader for FsImageLoader {
    fn load(&self, path: &Path) -> Result<LumaBuffer> {
        if !is_supported_image(path) {
            return Err(Error::Decode {
                path: path.to_path_buf(),
                reason: "unsupported file type".into(),
            });
        }

        let image = image::open(path).map_err(|e| Error::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let (width, height) = image.dimensions();
        debug!("Decoded {} ({width}x{height})", path.display());

        LumaBuffer::from_image(&image)
    }
}

/// Writes luminance buffers as opaque RGBA PNG files.
#[derive(Debug, Default, Clone, Copy)]
pub struct PngExporter;

impl PngExporter {
    /// Creates a new exporter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ImageExporter for PngExporter {
    fn export(&self, buffer: &LumaBuffer, path: &Path) -> Result<()> {
        buffer
            .to_rgba_image()
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| Error::Export {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        debug!("Wrote {}x{} PNG to {}", buffer.width(), buffer.height(), path.display());
        Ok(())
    }
}

/// Checks if a path has a supported image extension.
fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .is_some_and(|e| RASTER_EXTENSIONS.contains(&e.as_str()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_is_supported_image() {
        assert!(is_supported_image(Path::new("test.jpg")));
        assert!(is_supported_image(Path::new("test.JPEG")));
        assert!(is_supported_image(Path::new("test.png")));
        assert!(is_supported_image(Path::new("test.BMP")));
        assert!(!is_supported_image(Path::new("test.txt")));
        assert!(!is_supported_image(Path::new("test")));
    }

    #[test]
    fn test_unsupported_extension_is_decode_error() {
        let err = FsImageLoader::new()
            .load(Path::new("notes.txt"))
            .unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
        assert!(err.to_string().contains("unsupported"));
    }
}
