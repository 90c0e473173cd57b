//! Per-iteration render snapshot.

use super::{ButtonState, Layout, Rect};
use crate::domain::{Brightness, Contrast, LumaBuffer, ViewMode};
use crate::engine::{Histogram, Statistics};

/// Everything a display needs to draw one iteration.
#[derive(Debug, Clone)]
pub struct Frame<'a> {
    /// Buffer shown in the image view.
    pub image: &'a LumaBuffer,
    /// Histogram of `image`.
    pub histogram: &'a Histogram,
    /// Statistics of `image`.
    pub statistics: Statistics,
    /// Which buffer `image` is.
    pub mode: ViewMode,
    /// Sidebar geometry.
    pub layout: &'a Layout,
    /// Toggle button visual state.
    pub button_state: ButtonState,
    /// Whether text annotations should be drawn.
    pub annotations: bool,
    /// Last status message, e.g. an export result.
    pub status: Option<&'a str>,
}

impl Frame<'_> {
    /// Text of the toggle button.
    #[must_use]
    pub const fn button_label(&self) -> &'static str {
        self.mode.button_label()
    }

    /// Brightness label for the mean.
    #[must_use]
    pub fn brightness(&self) -> Brightness {
        self.statistics.brightness()
    }

    /// Contrast label for the standard deviation.
    #[must_use]
    pub fn contrast(&self) -> Contrast {
        self.statistics.contrast()
    }

    /// Annotation line for the mean, e.g. `Mean: 127.50 (mid)`.
    #[must_use]
    pub fn mean_line(&self) -> String {
        format!("Mean: {:.2} ({})", self.statistics.mean, self.brightness())
    }

    /// Annotation line for the standard deviation.
    #[must_use]
    pub fn stddev_line(&self) -> String {
        format!("Std dev: {:.2} ({})", self.statistics.stddev, self.contrast())
    }

    /// Histogram bars in sidebar coordinates.
    #[must_use]
    pub fn bars(&self) -> Vec<Rect> {
        self.layout.sidebar_bars(self.histogram)
    }

    /// Graph area in sidebar coordinates.
    #[must_use]
    pub fn graph_area(&self) -> Rect {
        self.layout
            .graph_area(self.layout.sidebar_width, self.layout.sidebar_height)
    }
}
