//! Core types for the playback controller

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackState {
    /// No track loaded
    #[default]
    Idle,

    /// Currently playing
    Playing,

    /// Paused mid-track
    Paused,
}

impl PlaybackState {
    /// Convert to string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Playing => "playing",
            Self::Paused => "paused",
        }
    }
}

impl std::fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Label shown on a track's play button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonLabel {
    /// Track is not active
    PlayNow,

    /// Track is playing; pressing pauses it
    Pause,

    /// Track is paused; pressing resumes it
    Resume,
}

impl ButtonLabel {
    /// The display text for this label
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PlayNow => "Play Now",
            Self::Pause => "Pause",
            Self::Resume => "Resume",
        }
    }
}

impl std::fmt::Display for ButtonLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Format an elapsed time as `M:SS`
///
/// Minutes are unpadded, seconds are zero-padded to two digits:
/// 5 seconds renders as `0:05`, 75 seconds as `1:15`.
pub fn format_time(time: Duration) -> String {
    let total = time.as_secs_f64();
    let minutes = (total / 60.0).floor() as u64;
    let seconds = (total % 60.0).floor() as u64;
    format!("{}:{:02}", minutes, seconds)
}
