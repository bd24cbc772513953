//! Aria Player - Playback Control
//!
//! Platform-agnostic playback control for Aria Player.
//!
//! This crate provides:
//! - The [`PlayerController`] state machine: play, pause, resume, switch
//!   tracks, seek, and the per-frame tick that drives the seek display
//! - Paused-offset bookkeeping so the most recently touched track resumes
//!   mid-track
//! - Natural end-of-track detection
//! - Event queueing for UI synchronization
//!
//! # Architecture
//!
//! `aria-playback` never talks to an audio device or a UI toolkit directly.
//! The platform provides three collaborators via traits:
//! - [`AudioClock`]: a monotonic clock; all elapsed-time math runs on it
//! - [`AudioBackend`]: creates one-shot [`SourceHandle`]s ("start this
//!   buffer at this offset"). A handle can only be stopped - the controller
//!   destroys and recreates it on every pause, resume, and seek
//! - [`Surface`]: the rendering seam (button labels, transport text, seek
//!   indicator)
//!
//! # Example
//!
//! ```rust
//! use aria_audio::{DecodedTrack, TrackLibrary};
//! use aria_core::{AudioBuffer, AudioFormat, Catalog, SampleRate, Track};
//! use aria_playback::{
//!     AudioBackend, NullSurface, PlaybackState, PlayerController, SourceHandle, SystemClock,
//! };
//! use std::time::Duration;
//!
//! // A backend whose voices play nothing (a real one binds the buffer to
//! // the platform's audio output)
//! struct MuteBackend;
//! struct MuteHandle;
//!
//! impl SourceHandle for MuteHandle {
//!     fn stop(&mut self) {}
//! }
//!
//! impl AudioBackend for MuteBackend {
//!     fn start(
//!         &mut self,
//!         _track: &DecodedTrack,
//!         _offset: Duration,
//!     ) -> aria_playback::Result<Box<dyn SourceHandle>> {
//!         Ok(Box::new(MuteHandle))
//!     }
//! }
//!
//! let catalog = Catalog::new(vec![Track::new("song.mp3".into(), "Song", "Artist")]);
//! let library = TrackLibrary::from_slots(vec![Some(DecodedTrack::new(AudioBuffer::new(
//!     vec![0.0; 44_100 * 2],
//!     AudioFormat::new(SampleRate::CD_QUALITY, 2),
//! )))]);
//!
//! let mut player = PlayerController::new(
//!     catalog,
//!     library,
//!     Box::new(SystemClock::new()),
//!     Box::new(MuteBackend),
//!     Box::new(NullSurface),
//! );
//!
//! player.play_or_toggle(0).unwrap();
//! assert_eq!(player.state(), PlaybackState::Playing);
//!
//! // Same index again acts as pause
//! player.play_or_toggle(0).unwrap();
//! assert_eq!(player.state(), PlaybackState::Paused);
//! ```

#![forbid(unsafe_code)]

mod backend;
mod clock;
mod controller;
mod error;
mod events;
mod surface;
pub mod types;

// Public exports
pub use backend::{AudioBackend, SourceHandle};
pub use clock::{AudioClock, SystemClock};
pub use controller::PlayerController;
pub use error::{PlayerError, Result};
pub use events::PlayerEvent;
pub use surface::{NullSurface, Surface};
pub use types::{format_time, ButtonLabel, PlaybackState};
