//! Owned row-major luminance buffer.

use image::{DynamicImage, Rgba, RgbaImage};

use crate::engine::{luminance, EqualizationLut};
use crate::error::{Error, Result};

/// A non-empty row-major buffer of 8-bit luminance values.
///
/// The length always equals `width * height`; every constructor checks it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LumaBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl LumaBuffer {
    /// Wraps raw luminance values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyImage`] for a zero-area image and
    /// [`Error::DimensionMismatch`] when `data` does not hold exactly
    /// `width * height` values.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = pixel_count(width, height)?;
        if expected == 0 {
            return Err(Error::EmptyImage { width, height });
        }
        if data.len() != expected {
            return Err(Error::DimensionMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Converts an RGBA raster to luminance. Alpha is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyImage`] if the raster has no pixels.
    pub fn from_rgba8(image: &RgbaImage) -> Result<Self> {
        let data = image
            .pixels()
            .map(|&Rgba([r, g, b, _])| luminance(r, g, b))
            .collect();
        Self::new(image.width(), image.height(), data)
    }

    /// Converts any decoded image to luminance via its 8-bit RGBA form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyImage`] if the image has no pixels.
    pub fn from_image(image: &DynamicImage) -> Result<Self> {
        Self::from_rgba8(&image.to_rgba8())
    }

    /// Image width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Number of luminance values (`width * height`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false; kept for the `len` convention.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Pixel count as used by the statistics engines.
    #[must_use]
    pub fn pixel_count(&self) -> u64 {
        self.data.len() as u64
    }

    /// Borrow the raw values.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Luminance at `(x, y)`, or `None` outside the image.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = y as usize * self.width as usize + x as usize;
        self.data.get(index).copied()
    }

    /// Returns a new buffer with every value passed through `lut`.
    #[must_use]
    pub fn remap(&self, lut: &EqualizationLut) -> Self {
        Self {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|&v| lut.apply(v)).collect(),
        }
    }

    /// Replicates the luminance into an opaque RGBA raster for export.
    #[must_use]
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let v = self.get(x, y).unwrap_or_default();
            Rgba([v, v, v, u8::MAX])
        })
    }
}

fn pixel_count(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| Error::InvalidInput(format!("image size {width}x{height} overflows")))
}
