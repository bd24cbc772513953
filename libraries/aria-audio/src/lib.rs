//! Aria Player - Audio Decoding
//!
//! Symphonia-backed decoding for Aria Player.
//!
//! This crate provides:
//! - [`SymphoniaDecoder`]: decodes a whole audio file into an in-memory
//!   stereo f32 buffer (MP3, FLAC, OGG, WAV, AAC, M4A)
//! - [`TrackLibrary`]: decodes every catalog entry concurrently and keeps
//!   the results addressable by catalog index
//!
//! Loading is deliberately failure-tolerant: a track that cannot be read or
//! decoded is recorded as unavailable and logged, and the rest of the
//! catalog loads normally. One bad file must not block playback of the
//! other nine.
//!
//! # Example
//!
//! ```rust,no_run
//! use aria_audio::TrackLibrary;
//! use aria_core::types::{Catalog, Track};
//! use std::path::PathBuf;
//!
//! # async fn load() {
//! let catalog = Catalog::new(vec![
//!     Track::new(PathBuf::from("songs/a.mp3"), "A", "Artist"),
//!     Track::new(PathBuf::from("songs/b.mp3"), "B", "Artist"),
//! ]);
//!
//! let library = TrackLibrary::load(&catalog).await;
//! if let Some(decoded) = library.buffer_for(0) {
//!     println!("track 0 runs for {:?}", decoded.duration);
//! }
//! # }
//! ```

#![forbid(unsafe_code)]

mod decoder;
mod error;
mod library;

pub use decoder::SymphoniaDecoder;
pub use error::{AudioError, Result};
pub use library::{DecodedTrack, TrackLibrary};
