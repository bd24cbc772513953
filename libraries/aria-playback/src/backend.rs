//! Audio backend abstraction
//!
//! The playable primitive is one-shot: a handle starts at a fixed offset and
//! can only be stopped. It cannot be paused, rewound, or repositioned in
//! place, so the controller tears the handle down and builds a new one on
//! every pause, resume, and seek. That destroy-and-recreate cycle is an
//! invariant of the design, not an implementation detail; keep it even on a
//! backend whose native voice could pause in place.

use crate::error::Result;
use aria_audio::DecodedTrack;
use std::time::Duration;

/// A live, one-shot playable instance bound to a decoded buffer
///
/// At most one handle exists at a time; starting a new one implies tearing
/// down the previous one first.
pub trait SourceHandle: Send {
    /// Stop and release the underlying voice
    ///
    /// Idempotent: stopping an already-stopped handle is a no-op.
    fn stop(&mut self);
}

/// Platform audio backend
///
/// Implementors bind a decoded buffer to the platform's output and begin
/// playback `offset` seconds into the track.
pub trait AudioBackend: Send {
    /// Start playing `track` at `offset` from its beginning
    ///
    /// # Errors
    /// Returns an error if the platform voice cannot be created
    fn start(&mut self, track: &DecodedTrack, offset: Duration) -> Result<Box<dyn SourceHandle>>;
}
