//! Test support utilities for graylens.
//!
//! Provides mocks of the core ports and synthetic image builders for
//! testing the inspector without real files or a terminal.
//!
//! # Example
//!
//! ```
//! use graylens_test_support::{MockImageExporter, ScriptedEvents, SyntheticImageBuilder};
//!
//! let image = SyntheticImageBuilder::horizontal_gradient(64, 16);
//! let buffer = SyntheticImageBuilder::luma(&image);
//! assert_eq!(buffer.len(), 64 * 16);
//!
//! let events = ScriptedEvents::new(vec![]);
//! let exporter = MockImageExporter::new();
//! # let _ = (events, exporter);
//! ```

mod builders;
mod mocks;

pub use builders::SyntheticImageBuilder;
pub use mocks::{
    FrameRecord, MockImageExporter, MockImageLoader, RecordingDisplay, ScriptedEvents,
};
