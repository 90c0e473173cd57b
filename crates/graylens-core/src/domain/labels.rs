//! Qualitative labels derived from luminance statistics.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Mean at or above which an image is considered bright.
pub const BRIGHT_MEAN: f64 = 170.0;
/// Mean at or below which an image is considered dark.
pub const DARK_MEAN: f64 = 85.0;
/// Standard deviation at or above which contrast is high.
pub const HIGH_CONTRAST_STD: f64 = 60.0;
/// Standard deviation at or below which contrast is low.
pub const LOW_CONTRAST_STD: f64 = 20.0;

/// Overall brightness of an image, derived from the mean luminance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Brightness {
    /// Mean >= 170.
    Bright,
    /// Between the two bounds.
    Mid,
    /// Mean <= 85.
    Dark,
}

impl Brightness {
    /// Classifies a mean luminance. Bounds are inclusive toward the extremes.
    #[must_use]
    pub fn classify(mean: f64) -> Self {
        if mean >= BRIGHT_MEAN {
            Self::Bright
        } else if mean <= DARK_MEAN {
            Self::Dark
        } else {
            Self::Mid
        }
    }

    /// Lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bright => "bright",
            Self::Mid => "mid",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contrast level, derived from the luminance standard deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Contrast {
    /// Stddev >= 60.
    High,
    /// Between the two bounds.
    Mid,
    /// Stddev <= 20.
    Low,
}

impl Contrast {
    /// Classifies a standard deviation. Bounds are inclusive toward the extremes.
    #[must_use]
    pub fn classify(stddev: f64) -> Self {
        if stddev >= HIGH_CONTRAST_STD {
            Self::High
        } else if stddev <= LOW_CONTRAST_STD {
            Self::Low
        } else {
            Self::Mid
        }
    }

    /// Lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Mid => "mid",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Contrast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which buffer is currently shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// The converted image as loaded.
    #[default]
    Original,
    /// The histogram-equalized image.
    Equalized,
}

impl ViewMode {
    /// The opposite mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Original => Self::Equalized,
            Self::Equalized => Self::Original,
        }
    }

    /// Label of the toggle button, naming the mode a click switches to.
    #[must_use]
    pub const fn button_label(self) -> &'static str {
        match self {
            Self::Original => "Equalize",
            Self::Equalized => "Original",
        }
    }
}
