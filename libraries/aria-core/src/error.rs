/// Core error types for Aria Player
use thiserror::Error;

/// Result type alias using `AriaError`
pub type Result<T> = std::result::Result<T, AriaError>;

/// Core error type for Aria Player
#[derive(Error, Debug)]
pub enum AriaError {
    /// Audio decoding/playback errors
    #[error("Audio error: {0}")]
    Audio(String),

    /// Track index outside the catalog
    #[error("Track index out of bounds: {0}")]
    IndexOutOfBounds(usize),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl AriaError {
    /// Create an audio error
    pub fn audio(msg: impl Into<String>) -> Self {
        Self::Audio(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
