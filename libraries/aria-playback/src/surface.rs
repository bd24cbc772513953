//! Rendering surface abstraction
//!
//! The controller never touches a UI toolkit directly; it renders through
//! this seam. An embedder maps these calls onto its page, terminal, or
//! widget tree.

use crate::types::ButtonLabel;
use std::time::Duration;

/// Rendering surface for playback state
pub trait Surface: Send {
    /// Set the label of a track's play button
    fn set_button(&mut self, index: usize, label: ButtonLabel);

    /// Show the active track in the transport bar (title, artist, total time)
    fn show_track(&mut self, title: &str, artist: &str, total: Duration);

    /// Show the elapsed time text (already formatted as `M:SS`)
    fn show_elapsed(&mut self, text: &str);

    /// Move the seek indicator to a fraction of the bar width
    ///
    /// `fraction` is `elapsed / duration`; values at or above 1.0 mean the
    /// track has reached its end.
    fn set_seek_fraction(&mut self, fraction: f64);
}

/// Surface that renders nothing
///
/// For headless embedders and tests that only care about state transitions.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn set_button(&mut self, _index: usize, _label: ButtonLabel) {}

    fn show_track(&mut self, _title: &str, _artist: &str, _total: Duration) {}

    fn show_elapsed(&mut self, _text: &str) {}

    fn set_seek_fraction(&mut self, _fraction: f64) {}
}
