//! Port definitions for hexagonal architecture.
//!
//! These traits define the boundaries between the core and its collaborators:
//! image decoding/encoding, user input and rendering.

mod display;
mod image_io;
mod input;

pub use display::Display;
pub use image_io::{ImageExporter, ImageLoader};
pub use input::EventSource;
