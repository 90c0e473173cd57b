//! Graylens Core - Luminance statistics and histogram equalization.
//!
//! This crate contains the domain types, the pixel-statistics engines,
//! the toggleable [`ImageState`] and the input-driven [`Session`] controller.
//! Decoding, encoding, input and rendering are reached through the traits
//! in [`ports`].

pub mod domain;
pub mod engine;
mod error;
pub mod ports;
pub mod session;
mod state;

pub use domain::{Brightness, Contrast, LumaBuffer, ViewMode};
pub use engine::{equalize, luminance, EqualizationLut, Histogram, Statistics};
pub use error::{Error, Result};
pub use ports::{Display, EventSource, ImageExporter, ImageLoader};
pub use session::{
    ButtonState, Control, Frame, InputEvent, Key, Layout, Rect, Session, WindowId,
    DEFAULT_EXPORT_PATH,
};
pub use state::ImageState;
