//! Sidebar geometry: toggle button and histogram bars.

use crate::engine::{Histogram, BINS};

/// Axis-aligned rectangle in window pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub w: f32,
    /// Height.
    pub h: f32,
}

impl Rect {
    /// Creates a rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Closed containment: all four edges count as inside.
    #[must_use]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.w && y >= self.y && y <= self.y + self.h
    }
}

/// Fixed sidebar layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Sidebar width in pixels.
    pub sidebar_width: u32,
    /// Sidebar height in pixels.
    pub sidebar_height: u32,
    /// Gap between image window and sidebar.
    pub gap: u32,
    /// Toggle button region, in sidebar coordinates.
    pub button: Rect,
    /// Margin around the histogram graph.
    pub graph_margin: f32,
    /// Space below the graph reserved for annotations and the button.
    pub footer_height: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            sidebar_width: 420,
            sidebar_height: 480,
            gap: 12,
            button: Rect::new(20.0, 480.0 - 70.0, 140.0, 40.0),
            graph_margin: 10.0,
            footer_height: 145.0,
        }
    }
}

impl Layout {
    /// Graph area for an output of `width` x `height` pixels.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn graph_area(&self, width: u32, height: u32) -> Rect {
        let m = self.graph_margin;
        Rect::new(
            m,
            m,
            (width as f32 - 2.0 * m).max(0.0),
            (height as f32 - self.footer_height).max(0.0),
        )
    }

    /// One bar per bin, scaled so the tallest bin fills the graph height.
    ///
    /// Bars are at least one pixel wide and bottom-aligned in the graph area.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn histogram_bars(&self, histogram: &Histogram, width: u32, height: u32) -> Vec<Rect> {
        let graph = self.graph_area(width, height);
        let max = histogram.max_count().max(1) as f64;
        let bar_w = (graph.w / BINS as f32).max(1.0);

        histogram
            .bins()
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                #[allow(clippy::cast_possible_truncation)]
                let bar_h = ((count as f64 / max) * f64::from(graph.h)) as f32;
                Rect::new(
                    graph.x + i as f32 * bar_w,
                    graph.y + (graph.h - bar_h),
                    bar_w,
                    bar_h,
                )
            })
            .collect()
    }

    /// Bars for the sidebar's own size.
    #[must_use]
    pub fn sidebar_bars(&self, histogram: &Histogram) -> Vec<Rect> {
        self.histogram_bars(histogram, self.sidebar_width, self.sidebar_height)
    }
}
