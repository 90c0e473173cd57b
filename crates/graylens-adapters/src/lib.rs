//! Graylens Adapters - External adapters for graylens.
//!
//! This crate provides adapters for:
//! - Filesystem image decoding and PNG export
//! - Line-oriented terminal input
//! - Text rendering of frames to a terminal

pub mod fs;
pub mod terminal;

pub use fs::{FsImageLoader, PngExporter};
pub use terminal::{parse_command, TerminalDisplay, TerminalEvents};
