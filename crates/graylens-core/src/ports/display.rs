//! Rendering port.

use crate::session::Frame;

/// Port receiving one snapshot per loop iteration.
pub trait Display {
    /// Draws the frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn present(&mut self, frame: &Frame<'_>) -> anyhow::Result<()>;
}
