//! Input event port.

use crate::session::InputEvent;

/// Port delivering user input to the session loop.
pub trait EventSource {
    /// Returns the events pending for this iteration, possibly none.
    ///
    /// Sources that run dry report [`InputEvent::Quit`].
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying input cannot be read.
    fn poll(&mut self) -> anyhow::Result<Vec<InputEvent>>;
}
