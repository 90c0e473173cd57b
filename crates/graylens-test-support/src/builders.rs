//! Synthetic image builders for testing.

use graylens_core::LumaBuffer;
use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};

/// Builder for creating synthetic test images.
///
/// Provides convenience methods for generating images with specific tonal
/// characteristics (uniform, dark, bright, low contrast, etc.).
pub struct SyntheticImageBuilder;

impl SyntheticImageBuilder {
    // === Conversion ===

    /// Converts a synthetic image to luminance.
    ///
    /// # Panics
    ///
    /// Panics on zero-area images; builders never produce them.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn luma(image: &DynamicImage) -> LumaBuffer {
        LumaBuffer::from_image(image).expect("synthetic images are non-empty")
    }

    /// Builds a luminance buffer directly from values.
    ///
    /// # Panics
    ///
    /// Panics if `values.len() != width * height`.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn buffer(width: u32, height: u32, values: Vec<u8>) -> LumaBuffer {
        LumaBuffer::new(width, height, values).expect("values must match dimensions")
    }

    // === Reference Scenarios ===

    /// 2x2 image with luminances 0, 85, 170, 255.
    #[must_use]
    pub fn four_levels() -> DynamicImage {
        let values = [0u8, 85, 170, 255];
        let img = GrayImage::from_fn(2, 2, |x, y| Luma([values[(y * 2 + x) as usize]]));
        DynamicImage::ImageLuma8(img)
    }

    /// Uniform gray image.
    #[must_use]
    pub fn uniform_gray(width: u32, height: u32, value: u8) -> DynamicImage {
        DynamicImage::ImageLuma8(GrayImage::from_fn(width, height, |_, _| Luma([value])))
    }

    /// Uniform color image.
    #[must_use]
    pub fn solid_rgb(width: u32, height: u32, rgb: [u8; 3]) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |_, _| Rgb(rgb)))
    }

    // === Tonal Range ===

    /// Smooth left-to-right ramp covering 0-255.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn horizontal_gradient(width: u32, height: u32) -> DynamicImage {
        let img = GrayImage::from_fn(width, height, |x, _| {
            let val = ((u32::from(u8::MAX) * x) / width.saturating_sub(1).max(1)) as u8;
            Luma([val])
        });
        DynamicImage::ImageLuma8(img)
    }

    /// Ramp squeezed into `low..=high`; low contrast when the span is narrow.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn narrow_range(width: u32, height: u32, low: u8, high: u8) -> DynamicImage {
        let span = u32::from(high.saturating_sub(low));
        let img = GrayImage::from_fn(width, height, |x, _| {
            let val = u32::from(low) + (span * x) / width.saturating_sub(1).max(1);
            Luma([val as u8])
        });
        DynamicImage::ImageLuma8(img)
    }

    /// Very dark image with slight variation below `max_brightness`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn dark_image(width: u32, height: u32, max_brightness: u8) -> DynamicImage {
        let img = GrayImage::from_fn(width, height, |x, y| {
            let val = ((x + y) % u32::from(max_brightness.max(1))) as u8;
            Luma([val])
        });
        DynamicImage::ImageLuma8(img)
    }

    /// Very bright image with slight variation above `min_brightness`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn bright_image(width: u32, height: u32, min_brightness: u8) -> DynamicImage {
        let img = GrayImage::from_fn(width, height, |x, y| {
            let range = 255 - min_brightness;
            let val = min_brightness + ((x + y) % u32::from(range.max(1))) as u8;
            Luma([val])
        });
        DynamicImage::ImageLuma8(img)
    }

    /// Black and white checkerboard (maximum contrast).
    #[must_use]
    pub fn checkerboard(width: u32, height: u32, cell_size: u32) -> DynamicImage {
        let cell = cell_size.max(1);
        let img = GrayImage::from_fn(width, height, |x, y| {
            if (x / cell + y / cell) % 2 == 0 {
                Luma([255u8])
            } else {
                Luma([0u8])
            }
        });
        DynamicImage::ImageLuma8(img)
    }
}
