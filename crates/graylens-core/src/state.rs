//! Toggleable original/equalized image state.

use tracing::debug;

use crate::domain::{Brightness, Contrast, LumaBuffer, ViewMode};
use crate::engine::{equalize, Histogram, Statistics};
use crate::error::Result;

/// Owns the original and current luminance buffers plus their derived data.
///
/// The original buffer is never modified. Equalization always starts from
/// it, and reverting reinstates a copy of it, so a round trip through
/// [`ImageState::toggle`] restores the exact original bytes.
#[derive(Debug, Clone)]
pub struct ImageState {
    original: LumaBuffer,
    current: LumaBuffer,
    mode: ViewMode,
    histogram: Histogram,
    statistics: Statistics,
}

impl ImageState {
    /// Creates the state in [`ViewMode::Original`].
    ///
    /// # Errors
    ///
    /// Propagates statistics errors; cannot fail for a valid [`LumaBuffer`].
    pub fn new(buffer: LumaBuffer) -> Result<Self> {
        let histogram = Histogram::from_buffer(&buffer);
        let statistics = Statistics::compute(&histogram, buffer.pixel_count())?;
        Ok(Self {
            current: buffer.clone(),
            original: buffer,
            mode: ViewMode::Original,
            histogram,
            statistics,
        })
    }

    /// Switches between original and equalized and recomputes statistics.
    ///
    /// On error the state is left unchanged.
    ///
    /// # Errors
    ///
    /// Propagates engine errors.
    pub fn toggle(&mut self) -> Result<ViewMode> {
        let next = self.mode.toggled();
        let current = match next {
            ViewMode::Equalized => {
                let original_hist = Histogram::from_buffer(&self.original);
                equalize(&self.original, &original_hist, self.original.pixel_count())?
            }
            ViewMode::Original => self.original.clone(),
        };
        let histogram = Histogram::from_buffer(&current);
        let statistics = Statistics::compute(&histogram, current.pixel_count())?;

        self.current = current;
        self.histogram = histogram;
        self.statistics = statistics;
        self.mode = next;

        debug!(
            mode = ?self.mode,
            mean = self.statistics.mean,
            stddev = self.statistics.stddev,
            "view toggled"
        );
        Ok(next)
    }

    /// Toggles only if `mode` differs from the current one.
    ///
    /// # Errors
    ///
    /// Propagates engine errors.
    pub fn set_mode(&mut self, mode: ViewMode) -> Result<()> {
        if self.mode != mode {
            self.toggle()?;
        }
        Ok(())
    }

    /// Which buffer is current.
    #[must_use]
    pub const fn mode(&self) -> ViewMode {
        self.mode
    }

    /// The buffer currently displayed.
    #[must_use]
    pub const fn current(&self) -> &LumaBuffer {
        &self.current
    }

    /// The buffer as loaded.
    #[must_use]
    pub const fn original(&self) -> &LumaBuffer {
        &self.original
    }

    /// Histogram of the current buffer.
    #[must_use]
    pub const fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    /// Statistics of the current buffer.
    #[must_use]
    pub const fn statistics(&self) -> Statistics {
        self.statistics
    }

    /// Brightness label of the current buffer.
    #[must_use]
    pub fn brightness(&self) -> Brightness {
        self.statistics.brightness()
    }

    /// Contrast label of the current buffer.
    #[must_use]
    pub fn contrast(&self) -> Contrast {
        self.statistics.contrast()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn state(width: u32, height: u32, data: Vec<u8>) -> ImageState {
        ImageState::new(LumaBuffer::new(width, height, data).unwrap()).unwrap()
    }

    #[test]
    fn test_initial_state_is_original() {
        let s = state(2, 2, vec![0, 85, 170, 255]);
        assert_eq!(s.mode(), ViewMode::Original);
        assert_eq!(s.current(), s.original());
        assert_eq!(s.histogram().total(), 4);
        assert!((s.statistics().mean - 127.5).abs() < 1e-9);
    }

    #[test]
    fn test_toggle_equalizes_and_recomputes() {
        let mut s = state(2, 2, vec![0, 85, 170, 255]);
        assert_eq!(s.toggle().unwrap(), ViewMode::Equalized);
        assert_eq!(s.current().as_slice(), &[64, 128, 191, 255]);
        assert_eq!(s.histogram().count(64), 1);
        assert_eq!(s.histogram().count(0), 0);
        assert!((s.statistics().mean - 159.5).abs() < 1e-9);
        assert_eq!(s.original().as_slice(), &[0, 85, 170, 255]);
    }

    #[test]
    fn test_round_trip_restores_exact_bytes() {
        let data: Vec<u8> = (0..64u32).map(|i| (i * 7 % 90 + 20) as u8).collect();
        let mut s = state(8, 8, data.clone());
        let before_hist = s.histogram().clone();
        let before_stats = s.statistics();

        s.toggle().unwrap();
        assert_ne!(s.current().as_slice(), data.as_slice());
        s.toggle().unwrap();

        assert_eq!(s.mode(), ViewMode::Original);
        assert_eq!(s.current().as_slice(), data.as_slice());
        assert_eq!(s.histogram(), &before_hist);
        assert_eq!(s.statistics(), before_stats);
    }

    #[test]
    fn test_equalization_always_starts_from_original() {
        let mut s = state(4, 1, vec![10, 20, 30, 40]);
        s.toggle().unwrap();
        let first = s.current().clone();
        s.toggle().unwrap();
        s.toggle().unwrap();
        assert_eq!(s.current(), &first);
    }

    #[test]
    fn test_single_black_pixel_scenario() {
        let mut s = state(1, 1, vec![0]);
        assert_eq!(s.histogram().count(0), 1);
        assert_eq!(s.statistics().mean, 0.0);
        assert_eq!(s.statistics().stddev, 0.0);
        assert_eq!(s.brightness(), Brightness::Dark);
        assert_eq!(s.contrast(), Contrast::Low);

        s.toggle().unwrap();
        assert!(!s.statistics().mean.is_nan());
        s.toggle().unwrap();
        assert_eq!(s.current().as_slice(), &[0]);
    }

    #[test]
    fn test_set_mode_is_idempotent() {
        let mut s = state(2, 1, vec![3, 9]);
        s.set_mode(ViewMode::Equalized).unwrap();
        let once = s.current().clone();
        s.set_mode(ViewMode::Equalized).unwrap();
        assert_eq!(s.current(), &once);
        s.set_mode(ViewMode::Original).unwrap();
        assert_eq!(s.current().as_slice(), &[3, 9]);
    }
}
