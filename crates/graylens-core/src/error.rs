//! Error types for the graylens core.

use std::path::PathBuf;

/// Errors produced by the core engines and ports.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The image has no pixels.
    #[error("image has no pixels ({width}x{height})")]
    EmptyImage {
        /// Image width in pixels.
        width: u32,
        /// Image height in pixels.
        height: u32,
    },

    /// Pixel data length disagrees with the declared dimensions.
    #[error("buffer holds {actual} values but {width}x{height} requires {expected}")]
    DimensionMismatch {
        /// Image width in pixels.
        width: u32,
        /// Image height in pixels.
        height: u32,
        /// Number of values implied by the dimensions.
        expected: usize,
        /// Number of values actually supplied.
        actual: usize,
    },

    /// A computation precondition was violated.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The image could not be decoded.
    #[error("failed to decode image {}: {reason}", path.display())]
    Decode {
        /// Path of the source image.
        path: PathBuf,
        /// Underlying decoder message.
        reason: String,
    },

    /// The image could not be written.
    #[error("failed to export image {}: {reason}", path.display())]
    Export {
        /// Destination path.
        path: PathBuf,
        /// Underlying encoder message.
        reason: String,
    },
}

/// Convenience alias for core results.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_image_message() {
        let err = Error::EmptyImage {
            width: 0,
            height: 4,
        };
        assert_eq!(err.to_string(), "image has no pixels (0x4)");
    }

    #[test]
    fn test_decode_message_includes_path() {
        let err = Error::Decode {
            path: PathBuf::from("missing.png"),
            reason: "No such file or directory".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("missing.png"));
        assert!(msg.contains("No such file"));
    }
}
