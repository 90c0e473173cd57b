//! Cumulative-distribution histogram equalization.

use tracing::trace;

use super::histogram::{Histogram, BINS};
use crate::domain::LumaBuffer;
use crate::error::{Error, Result};

/// Remapping table built from a histogram's cumulative distribution.
///
/// Entries below the darkest populated bin are never looked up by pixels
/// of the buffer the histogram came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EqualizationLut {
    table: [u8; BINS],
}

impl EqualizationLut {
    /// Builds the table for `total_pixels` samples.
    ///
    /// `cdf_min` is the cumulative count before the first populated bin (zero
    /// when bin 0 is populated). A non-positive denominator falls back to 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] when `total_pixels` is zero.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn from_histogram(histogram: &Histogram, total_pixels: u64) -> Result<Self> {
        if total_pixels == 0 {
            return Err(Error::InvalidInput(
                "equalization needs at least one pixel".into(),
            ));
        }

        let cdf = histogram.cumulative();
        let cdf_min = match histogram.first_non_empty() {
            Some(first) if first > 0 => cdf[usize::from(first) - 1],
            _ => 0,
        };
        let denominator = if total_pixels > cdf_min {
            (total_pixels - cdf_min) as f64
        } else {
            1.0
        };
        trace!(cdf_min, denominator, "building equalization table");

        let mut table = [0u8; BINS];
        for (entry, &cumulative) in table.iter_mut().zip(cdf.iter()) {
            let normalized = (cumulative as f64 - cdf_min as f64) / denominator;
            *entry = (normalized * 255.0).round().clamp(0.0, 255.0) as u8;
        }

        Ok(Self { table })
    }

    /// Maps one luminance value.
    #[must_use]
    pub fn apply(&self, value: u8) -> u8 {
        self.table[usize::from(value)]
    }

    /// The full table, indexed by input luminance.
    #[must_use]
    pub const fn as_array(&self) -> &[u8; BINS] {
        &self.table
    }
}

/// Equalizes `buffer` using its histogram, returning a new buffer.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] when `total_pixels` is zero.
pub fn equalize(buffer: &LumaBuffer, histogram: &Histogram, total_pixels: u64) -> Result<LumaBuffer> {
    let lut = EqualizationLut::from_histogram(histogram, total_pixels)?;
    Ok(buffer.remap(&lut))
}
