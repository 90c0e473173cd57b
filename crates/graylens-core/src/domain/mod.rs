//! Core domain types for luminance inspection.

mod buffer;
mod labels;

pub use buffer::LumaBuffer;
pub use labels::{Brightness, Contrast, ViewMode};
