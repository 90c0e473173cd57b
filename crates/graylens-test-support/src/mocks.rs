//! Mock implementations of core port traits.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use graylens_core::{
    ButtonState, Display, Error, EventSource, Frame, ImageExporter, ImageLoader, InputEvent,
    LumaBuffer, Result, ViewMode,
};

/// Mock implementation of `ImageLoader` for testing.
///
/// Returns a pre-built buffer, or a decode error when built with
/// [`MockImageLoader::failing`], and counts calls.
pub struct MockImageLoader {
    buffer: Option<LumaBuffer>,
    load_count: Arc<Mutex<usize>>,
}

impl MockImageLoader {
    /// Creates a loader that always yields `buffer`.
    #[must_use]
    pub fn new(buffer: LumaBuffer) -> Self {
        Self {
            buffer: Some(buffer),
            load_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Creates a loader that always fails to decode.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            buffer: None,
            load_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Returns the number of `load` calls.
    #[must_use]
    pub fn load_count(&self) -> usize {
        *self
            .load_count
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl ImageLoader for MockImageLoader {
    fn load(&self, path: &Path) -> Result<LumaBuffer> {
        if let Ok(mut c) = self.load_count.lock() {
            *c += 1;
        }
        self.buffer.clone().ok_or_else(|| Error::Decode {
            path: path.to_path_buf(),
            reason: "mock decode failure".into(),
        })
    }
}

/// Mock implementation of `ImageExporter` for testing.
///
/// Captures exported buffers for later assertions.
pub struct MockImageExporter {
    fail: bool,
    exports: Arc<Mutex<Vec<(PathBuf, LumaBuffer)>>>,
}

impl MockImageExporter {
    /// Creates an exporter that records every call.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fail: false,
            exports: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Creates an exporter whose writes always fail.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    /// Returns all captured exports.
    #[must_use]
    pub fn exports(&self) -> Vec<(PathBuf, LumaBuffer)> {
        self.exports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for MockImageExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageExporter for MockImageExporter {
    fn export(&self, buffer: &LumaBuffer, path: &Path) -> Result<()> {
        if self.fail {
            return Err(Error::Export {
                path: path.to_path_buf(),
                reason: "mock write failure".into(),
            });
        }
        self.exports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((path.to_path_buf(), buffer.clone()));
        Ok(())
    }
}

/// Event source replaying scripted batches, then quitting.
pub struct ScriptedEvents {
    batches: VecDeque<Vec<InputEvent>>,
    polls: usize,
}

impl ScriptedEvents {
    /// Creates a source yielding one batch per poll.
    #[must_use]
    pub fn new(batches: Vec<Vec<InputEvent>>) -> Self {
        Self {
            batches: batches.into(),
            polls: 0,
        }
    }

    /// Returns the number of polls so far.
    #[must_use]
    pub const fn polls(&self) -> usize {
        self.polls
    }
}

impl EventSource for ScriptedEvents {
    fn poll(&mut self) -> anyhow::Result<Vec<InputEvent>> {
        self.polls += 1;
        Ok(self
            .batches
            .pop_front()
            .unwrap_or_else(|| vec![InputEvent::Quit]))
    }
}

/// Owned summary of a presented frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRecord {
    /// View mode.
    pub mode: ViewMode,
    /// Mean luminance.
    pub mean: f64,
    /// Standard deviation.
    pub stddev: f64,
    /// Histogram total.
    pub total: u64,
    /// Button text.
    pub button_label: &'static str,
    /// Button visual state.
    pub button_state: ButtonState,
    /// Annotation flag.
    pub annotations: bool,
    /// Status line.
    pub status: Option<String>,
}

/// Display capturing a [`FrameRecord`] per presented frame.
#[derive(Default)]
pub struct RecordingDisplay {
    frames: Vec<FrameRecord>,
}

impl RecordingDisplay {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured frames.
    #[must_use]
    pub fn frames(&self) -> &[FrameRecord] {
        &self.frames
    }

    /// Most recent frame.
    #[must_use]
    pub fn last(&self) -> Option<&FrameRecord> {
        self.frames.last()
    }
}

impl Display for RecordingDisplay {
    fn present(&mut self, frame: &Frame<'_>) -> anyhow::Result<()> {
        self.frames.push(FrameRecord {
            mode: frame.mode,
            mean: frame.statistics.mean,
            stddev: frame.statistics.stddev,
            total: frame.histogram.total(),
            button_label: frame.button_label(),
            button_state: frame.button_state,
            annotations: frame.annotations,
            status: frame.status.map(str::to_owned),
        });
        Ok(())
    }
}
