//! Interactive session: routes input events to [`ImageState`] and exports.
//!
//! Button geometry lives in [`Layout`], the hover/press state in
//! [`ButtonState`] and the toggle in [`ImageState`].

mod event;
mod frame;
mod layout;

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, error, info, warn};

pub use event::{ButtonState, InputEvent, Key, WindowId};
pub use frame::Frame;
pub use layout::{Layout, Rect};

use crate::ports::{Display, EventSource, ImageExporter};
use crate::state::ImageState;

/// Default export destination.
pub const DEFAULT_EXPORT_PATH: &str = "output_image.png";

/// What the loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Stop the loop.
    Quit,
}

/// Single-threaded inspector session.
pub struct Session {
    state: ImageState,
    layout: Layout,
    button_state: ButtonState,
    export_path: PathBuf,
    annotations: bool,
    status: Option<String>,
}

impl Session {
    /// Creates a session with the default layout and export path.
    #[must_use]
    pub fn new(state: ImageState) -> Self {
        Self {
            state,
            layout: Layout::default(),
            button_state: ButtonState::Neutral,
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
            annotations: true,
            status: None,
        }
    }

    /// Sets the export destination.
    #[must_use]
    pub fn with_export_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.export_path = path.into();
        self
    }

    /// Overrides the sidebar layout.
    #[must_use]
    pub const fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Enables or disables text annotations.
    #[must_use]
    pub const fn with_annotations(mut self, enabled: bool) -> Self {
        self.annotations = enabled;
        self
    }

    /// The image state.
    #[must_use]
    pub const fn state(&self) -> &ImageState {
        &self.state
    }

    /// Current button visual state.
    #[must_use]
    pub const fn button_state(&self) -> ButtonState {
        self.button_state
    }

    /// Export destination.
    #[must_use]
    pub fn export_path(&self) -> &Path {
        &self.export_path
    }

    /// Last status message.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Applies one event.
    pub fn handle(&mut self, event: &InputEvent, exporter: &dyn ImageExporter) -> Control {
        match *event {
            InputEvent::Quit => return Control::Quit,
            InputEvent::KeyDown(Key::S) => self.export(exporter),
            InputEvent::KeyDown(Key::Other(c)) => debug!("Ignoring key {c:?}"),
            InputEvent::PointerMove { window, x, y } => {
                if window == WindowId::Sidebar {
                    self.button_state = if self.layout.button.contains(x, y) {
                        ButtonState::Hover
                    } else {
                        ButtonState::Neutral
                    };
                }
            }
            InputEvent::PointerDown { window, x, y } => {
                if window == WindowId::Sidebar && self.layout.button.contains(x, y) {
                    self.button_state = ButtonState::Active;
                }
            }
            InputEvent::PointerUp { window, x, y } => {
                if window == WindowId::Sidebar && self.layout.button.contains(x, y) {
                    self.toggle();
                }
                self.button_state = ButtonState::Neutral;
            }
        }
        Control::Continue
    }

    /// Toggles between original and equalized views.
    pub fn toggle(&mut self) {
        match self.state.toggle() {
            Ok(mode) => info!("Showing {mode:?} image"),
            Err(e) => warn!("Toggle failed: {e}"),
        }
    }

    /// Writes the displayed buffer to the export path.
    ///
    /// Failures are reported and leave the state unchanged.
    pub fn export(&mut self, exporter: &dyn ImageExporter) {
        match exporter.export(self.state.current(), &self.export_path) {
            Ok(()) => {
                info!("Saved {}", self.export_path.display());
                self.status = Some(format!("Saved {}", self.export_path.display()));
            }
            Err(e) => {
                error!("{e}");
                self.status = Some(format!("Export failed: {e}"));
            }
        }
    }

    /// Snapshot for the display.
    #[must_use]
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            image: self.state.current(),
            histogram: self.state.histogram(),
            statistics: self.state.statistics(),
            mode: self.state.mode(),
            layout: &self.layout,
            button_state: self.button_state,
            annotations: self.annotations,
            status: self.status.as_deref(),
        }
    }

    /// Runs the poll/update/redraw loop until a quit event.
    ///
    /// Sleeps `frame_delay` after each redraw.
    ///
    /// # Errors
    ///
    /// Returns an error if polling input or presenting a frame fails.
    pub fn run(
        &mut self,
        events: &mut dyn EventSource,
        display: &mut dyn Display,
        exporter: &dyn ImageExporter,
        frame_delay: Duration,
    ) -> anyhow::Result<()> {
        display.present(&self.frame())?;

        loop {
            let batch = events.poll()?;
            let quit = batch
                .iter()
                .any(|event| self.handle(event, exporter) == Control::Quit);
            if quit {
                debug!("Quit requested");
                return Ok(());
            }

            display.present(&self.frame())?;

            if !frame_delay.is_zero() {
                std::thread::sleep(frame_delay);
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::domain::{LumaBuffer, ViewMode};
    use crate::error::{Error, Result};

    #[derive(Default)]
    struct RecordingExporter {
        fail: bool,
        writes: Mutex<Vec<(PathBuf, Vec<u8>)>>,
    }

    impl ImageExporter for RecordingExporter {
        fn export(&self, buffer: &LumaBuffer, path: &Path) -> Result<()> {
            if self.fail {
                return Err(Error::Export {
                    path: path.to_path_buf(),
                    reason: "disk full".into(),
                });
            }
            self.writes
                .lock()
                .unwrap()
                .push((path.to_path_buf(), buffer.as_slice().to_vec()));
            Ok(())
        }
    }

    fn session() -> Session {
        let buffer = LumaBuffer::new(2, 2, vec![0, 85, 170, 255]).unwrap();
        Session::new(ImageState::new(buffer).unwrap())
    }

    fn click(window: WindowId, x: f32, y: f32) -> [InputEvent; 2] {
        [
            InputEvent::PointerDown { window, x, y },
            InputEvent::PointerUp { window, x, y },
        ]
    }

    #[test]
    fn test_click_on_button_toggles() {
        let mut s = session();
        let exporter = RecordingExporter::default();

        for e in click(WindowId::Sidebar, 30.0, 420.0) {
            assert_eq!(s.handle(&e, &exporter), Control::Continue);
        }
        assert_eq!(s.state().mode(), ViewMode::Equalized);
        assert_eq!(s.frame().button_label(), "Original");

        for e in click(WindowId::Sidebar, 30.0, 420.0) {
            s.handle(&e, &exporter);
        }
        assert_eq!(s.state().mode(), ViewMode::Original);
        assert_eq!(s.state().current().as_slice(), &[0, 85, 170, 255]);
    }

    #[test]
    fn test_click_on_button_far_corner_toggles() {
        let mut s = session();
        let exporter = RecordingExporter::default();
        for e in click(WindowId::Sidebar, 160.0, 450.0) {
            s.handle(&e, &exporter);
        }
        assert_eq!(s.state().mode(), ViewMode::Equalized);
    }

    #[test]
    fn test_click_outside_button_or_in_main_window_is_ignored() {
        let mut s = session();
        let exporter = RecordingExporter::default();
        for e in click(WindowId::Sidebar, 300.0, 420.0) {
            s.handle(&e, &exporter);
        }
        for e in click(WindowId::Main, 30.0, 420.0) {
            s.handle(&e, &exporter);
        }
        assert_eq!(s.state().mode(), ViewMode::Original);
    }

    #[test]
    fn test_button_state_follows_pointer() {
        let mut s = session();
        let exporter = RecordingExporter::default();
        let side = WindowId::Sidebar;

        s.handle(&InputEvent::PointerMove { window: side, x: 30.0, y: 420.0 }, &exporter);
        assert_eq!(s.button_state(), ButtonState::Hover);

        s.handle(&InputEvent::PointerDown { window: side, x: 30.0, y: 420.0 }, &exporter);
        assert_eq!(s.button_state(), ButtonState::Active);

        s.handle(&InputEvent::PointerUp { window: side, x: 400.0, y: 10.0 }, &exporter);
        assert_eq!(s.button_state(), ButtonState::Neutral);
        assert_eq!(s.state().mode(), ViewMode::Original);

        s.handle(&InputEvent::PointerMove { window: side, x: 30.0, y: 420.0 }, &exporter);
        s.handle(&InputEvent::PointerMove { window: WindowId::Main, x: 0.0, y: 0.0 }, &exporter);
        assert_eq!(s.button_state(), ButtonState::Hover);
        s.handle(&InputEvent::PointerMove { window: side, x: 0.0, y: 0.0 }, &exporter);
        assert_eq!(s.button_state(), ButtonState::Neutral);
    }

    #[test]
    fn test_export_key_writes_current_buffer() {
        let mut s = session().with_export_path("out.png");
        let exporter = RecordingExporter::default();
        for e in click(WindowId::Sidebar, 30.0, 420.0) {
            s.handle(&e, &exporter);
        }
        s.handle(&InputEvent::KeyDown(Key::from_char('s')), &exporter);

        let writes = exporter.writes.lock().unwrap();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].0, PathBuf::from("out.png"));
        assert_eq!(writes[0].1, vec![64, 128, 191, 255]);
        assert_eq!(s.status(), Some("Saved out.png"));
    }

    #[test]
    fn test_export_failure_is_recoverable() {
        let mut s = session();
        let exporter = RecordingExporter {
            fail: true,
            ..RecordingExporter::default()
        };
        let control = s.handle(&InputEvent::KeyDown(Key::S), &exporter);
        assert_eq!(control, Control::Continue);
        assert!(s.status().unwrap().starts_with("Export failed"));
        assert_eq!(s.state().mode(), ViewMode::Original);
    }

    #[test]
    fn test_other_keys_and_quit() {
        let mut s = session();
        let exporter = RecordingExporter::default();
        assert_eq!(
            s.handle(&InputEvent::KeyDown(Key::from_char('x')), &exporter),
            Control::Continue
        );
        assert!(exporter.writes.lock().unwrap().is_empty());
        assert_eq!(s.handle(&InputEvent::Quit, &exporter), Control::Quit);
    }

    #[test]
    fn test_frame_annotations() {
        let s = session();
        let frame = s.frame();
        assert_eq!(frame.mean_line(), "Mean: 127.50 (mid)");
        assert_eq!(frame.stddev_line(), "Std dev: 95.03 (high)");
        assert_eq!(frame.button_label(), "Equalize");
        assert_eq!(frame.bars().len(), 256);
        assert!(frame.annotations);
    }
}
