//! Aria Player Core
//!
//! Core types, traits, and error handling for Aria Player.
//!
//! This crate provides the foundational building blocks shared by the
//! decoder ([`aria-audio`]) and the playback controller ([`aria-playback`]):
//!
//! - **Domain Types**: `Track`, `Catalog`, `AudioBuffer`
//! - **Core Traits**: `AudioDecoder`
//! - **Error Handling**: Unified `AriaError` and `Result` types
//!
//! [`aria-audio`]: ../aria_audio/index.html
//! [`aria-playback`]: ../aria_playback/index.html
//!
//! # Example
//!
//! ```rust
//! use aria_core::types::{Catalog, Track};
//! use std::path::PathBuf;
//!
//! let catalog = Catalog::new(vec![
//!     Track::new(PathBuf::from("songs/dil-ibadat.mp3"), "Dil Ibadat", "Krishnakumar Kunnath"),
//!     Track::new(PathBuf::from("songs/khuda-jaane.mp3"), "Khuda Jaane", "KK & Shilpa Rao"),
//! ]);
//!
//! assert_eq!(catalog.len(), 2);
//! assert_eq!(catalog.get(0).unwrap().title, "Dil Ibadat");
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{AriaError, Result};
pub use traits::AudioDecoder;
pub use types::{AudioBuffer, AudioFormat, Catalog, SampleRate, Track};
