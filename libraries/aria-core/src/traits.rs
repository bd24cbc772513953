/// Core traits for Aria Player
use crate::error::Result;
use crate::types::AudioBuffer;
use std::path::Path;

/// Audio decoder trait
///
/// Implementers decode a whole audio file into an in-memory `AudioBuffer`.
/// The player keeps every catalog entry fully decoded, so there is no
/// streaming API here.
pub trait AudioDecoder: Send {
    /// Decode an audio file from the given path (loads the entire file)
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or decoded
    fn decode(&mut self, path: &Path) -> Result<AudioBuffer>;

    /// Check if the decoder supports the given file format
    fn supports_format(&self, path: &Path) -> bool;
}
