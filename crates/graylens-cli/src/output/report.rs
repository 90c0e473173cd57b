//! JSON statistics report.

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use graylens_core::{Brightness, Contrast, ImageState, ViewMode};
use serde::Serialize;

/// Statistics of the displayed buffer, as printed by `--report`.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Source image path.
    pub path: String,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Which buffer the numbers describe.
    pub mode: ViewMode,
    /// Mean luminance.
    pub mean: f64,
    /// Luminance standard deviation.
    pub stddev: f64,
    /// Brightness label.
    pub brightness: Brightness,
    /// Contrast label.
    pub contrast: Contrast,
    /// 256 bin counts.
    pub histogram: Vec<u64>,
}

impl Report {
    /// Builds a report for the current buffer of `state`.
    #[must_use]
    pub fn from_state(path: &Path, state: &ImageState) -> Self {
        let stats = state.statistics();
        Self {
            path: path.to_string_lossy().into_owned(),
            width: state.current().width(),
            height: state.current().height(),
            mode: state.mode(),
            mean: stats.mean,
            stddev: stats.stddev,
            brightness: stats.brightness(),
            contrast: stats.contrast(),
            histogram: state.histogram().bins().to_vec(),
        }
    }
}

/// Writes reports as JSON.
pub struct ReportOutput {
    writer: Box<dyn Write>,
}

impl ReportOutput {
    /// Creates an output writing to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self {
            writer: Box::new(io::stdout()),
        }
    }

    /// Creates an output writing to the given writer.
    #[allow(dead_code)] // API for programmatic use
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }

    /// Writes one report followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn write(&mut self, report: &Report, pretty: bool) -> Result<()> {
        let json = if pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        writeln!(self.writer, "{json}")?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use graylens_core::LumaBuffer;

    use super::*;

    struct SharedBuf(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn state() -> ImageState {
        ImageState::new(LumaBuffer::new(2, 2, vec![0, 85, 170, 255]).unwrap()).unwrap()
    }

    #[test]
    fn test_report_fields() {
        let report = Report::from_state(Path::new("levels.png"), &state());
        assert_eq!(report.width, 2);
        assert_eq!(report.histogram.len(), 256);
        assert_eq!(report.histogram.iter().sum::<u64>(), 4);
        assert_eq!(report.brightness, Brightness::Mid);
    }

    #[test]
    fn test_report_json_shape() {
        let sink = Rc::new(RefCell::new(Vec::new()));
        let mut output = ReportOutput::new(Box::new(SharedBuf(Rc::clone(&sink))));
        let mut s = state();
        s.toggle().unwrap();

        output
            .write(&Report::from_state(Path::new("levels.png"), &s), false)
            .unwrap();

        let text = String::from_utf8(sink.borrow().clone()).unwrap();
        let value: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(value["mode"], "equalized");
        assert_eq!(value["brightness"], "mid");
        assert_eq!(value["contrast"], "high");
        assert_eq!(value["histogram"][64], 1);
        assert_eq!(value["path"], "levels.png");
    }
}
