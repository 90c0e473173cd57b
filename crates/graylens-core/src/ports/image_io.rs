//! Image decode/encode ports.

use std::path::Path;

use crate::domain::LumaBuffer;
use crate::error::Result;

/// Port for decoding an image file into luminance.
pub trait ImageLoader: Send + Sync {
    /// Decodes the image at `path` and converts it to luminance.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Decode`] for missing, unsupported or corrupt
    /// files and [`crate::Error::EmptyImage`] for zero-area images.
    fn load(&self, path: &Path) -> Result<LumaBuffer>;
}

/// Port for writing the displayed buffer to disk.
pub trait ImageExporter: Send + Sync {
    /// Writes `buffer` to `path` as an opaque gray raster.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Export`] if the file cannot be written.
    fn export(&self, buffer: &LumaBuffer, path: &Path) -> Result<()>;
}
