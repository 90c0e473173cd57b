//! Mean and standard deviation from a histogram.

use serde::{Deserialize, Serialize};

use super::Histogram;
use crate::domain::{Brightness, Contrast};
use crate::error::{Error, Result};

/// Luminance mean and population standard deviation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Mean luminance (0-255).
    pub mean: f64,
    /// Standard deviation of luminance.
    pub stddev: f64,
}

impl Statistics {
    /// Computes mean and standard deviation over `total_pixels` samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] when `total_pixels` is zero.
    #[allow(clippy::cast_precision_loss)]
    pub fn compute(histogram: &Histogram, total_pixels: u64) -> Result<Self> {
        if total_pixels == 0 {
            return Err(Error::InvalidInput(
                "mean/stddev need at least one pixel".into(),
            ));
        }
        let total = total_pixels as f64;

        let sum: f64 = histogram
            .bins()
            .iter()
            .enumerate()
            .map(|(i, &count)| i as f64 * count as f64)
            .sum();
        let mean = sum / total;

        let variance: f64 = histogram
            .bins()
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                let diff = i as f64 - mean;
                count as f64 * diff * diff
            })
            .sum::<f64>()
            / total;

        Ok(Self {
            mean,
            stddev: variance.sqrt(),
        })
    }

    /// Computes statistics using the histogram's own total.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for an empty histogram.
    pub fn from_histogram(histogram: &Histogram) -> Result<Self> {
        Self::compute(histogram, histogram.total())
    }

    /// Brightness label for the mean.
    #[must_use]
    pub fn brightness(&self) -> Brightness {
        Brightness::classify(self.mean)
    }

    /// Contrast label for the standard deviation.
    #[must_use]
    pub fn contrast(&self) -> Contrast {
        Contrast::classify(self.stddev)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_four_level_mean_and_std() {
        let hist = Histogram::from_values(&[0, 85, 170, 255]);
        let stats = Statistics::compute(&hist, 4).unwrap();
        assert!((stats.mean - 127.5).abs() < 1e-9);
        // deviations: +-127.5, +-42.5 -> variance = (2*16256.25 + 2*1806.25) / 4
        let expected = ((2.0 * 127.5 * 127.5 + 2.0 * 42.5 * 42.5) / 4.0_f64).sqrt();
        assert!((stats.stddev - expected).abs() < 1e-9);
        assert_eq!(stats.brightness(), Brightness::Mid);
        assert_eq!(stats.contrast(), Contrast::High);
    }

    #[test]
    fn test_single_black_pixel() {
        let hist = Histogram::from_values(&[0]);
        let stats = Statistics::from_histogram(&hist).unwrap();
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.stddev, 0.0);
        assert_eq!(stats.brightness(), Brightness::Dark);
        assert_eq!(stats.contrast(), Contrast::Low);
    }

    #[test]
    fn test_uniform_has_zero_std() {
        let hist = Histogram::from_values(&[200; 64]);
        let stats = Statistics::from_histogram(&hist).unwrap();
        assert_eq!(stats.mean, 200.0);
        assert_eq!(stats.stddev, 0.0);
        assert_eq!(stats.brightness(), Brightness::Bright);
    }

    #[test]
    fn test_zero_pixels_is_rejected() {
        let hist = Histogram::from_values(&[]);
        let err = Statistics::compute(&hist, 0).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_mean_and_std_in_range_for_ramps() {
        for step in 1..=17u32 {
            let values: Vec<u8> = (0..=255u32)
                .step_by(step as usize)
                .map(|v| v as u8)
                .collect();
            let stats = Statistics::from_histogram(&Histogram::from_values(&values)).unwrap();
            assert!((0.0..=255.0).contains(&stats.mean));
            assert!(stats.stddev >= 0.0);
            assert!(!stats.stddev.is_nan());
        }
    }

    #[test]
    fn test_serializes_fields() {
        let stats = Statistics {
            mean: 12.5,
            stddev: 3.0,
        };
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["mean"], 12.5);
        assert_eq!(json["stddev"], 3.0);
    }
}
