//! Playback events
//!
//! Event-based communication for UI synchronization. The controller queues
//! events as it transitions; the embedder drains them once per frame with
//! [`crate::PlayerController::drain_events`].

use crate::types::PlaybackState;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Events emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Playback state changed (idle, playing, paused)
    StateChanged {
        /// The new playback state
        state: PlaybackState,
    },

    /// A track started playing (fresh start, resume, or seek restart)
    TrackStarted {
        /// Catalog index of the track
        index: usize,
        /// Offset into the track at which playback began
        offset: Duration,
    },

    /// The active source was torn down
    ///
    /// `position` is the elapsed time snapshot taken at teardown; on a track
    /// switch this is the outgoing track's offset at the switch moment.
    TrackStopped {
        /// Catalog index of the track
        index: usize,
        /// Elapsed time when the source was stopped
        position: Duration,
    },

    /// A track reached its natural end
    TrackFinished {
        /// Catalog index of the track
        index: usize,
    },
}
