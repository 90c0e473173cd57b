//! Discrete input events and button visual state.

/// Windows the inspector draws into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowId {
    /// The image view.
    Main,
    /// The histogram and controls view.
    Sidebar,
}

/// Keys that carry a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Export the displayed buffer.
    S,
    /// Any other key, ignored by the session.
    Other(char),
}

impl Key {
    /// Maps a typed character to a key, ignoring case.
    #[must_use]
    pub const fn from_char(c: char) -> Self {
        match c {
            's' | 'S' => Self::S,
            other => Self::Other(other),
        }
    }
}

/// One user input event. Coordinates are window-relative pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Close the inspector.
    Quit,
    /// A key was pressed.
    KeyDown(Key),
    /// The pointer moved.
    PointerMove {
        /// Window under the pointer.
        window: WindowId,
        /// Horizontal position.
        x: f32,
        /// Vertical position.
        y: f32,
    },
    /// A pointer button was pressed.
    PointerDown {
        /// Window under the pointer.
        window: WindowId,
        /// Horizontal position.
        x: f32,
        /// Vertical position.
        y: f32,
    },
    /// A pointer button was released.
    PointerUp {
        /// Window under the pointer.
        window: WindowId,
        /// Horizontal position.
        x: f32,
        /// Vertical position.
        y: f32,
    },
}

/// Visual state of the toggle button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonState {
    /// Idle.
    #[default]
    Neutral,
    /// Pointer is over the button.
    Hover,
    /// Pointer is pressed on the button.
    Active,
}
