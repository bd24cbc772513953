//! Error types for the playback controller

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlayerError {
    /// The track never decoded, so there is nothing to play
    #[error("Track {0} is unavailable (no decoded buffer)")]
    TrackUnavailable(usize),

    /// Index outside the catalog
    #[error("Index out of bounds: {0}")]
    IndexOutOfBounds(usize),

    /// Audio backend error
    #[error("Audio backend error: {0}")]
    Backend(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlayerError>;
