//! Domain types for Aria Player

mod audio;
mod track;

pub use audio::{AudioBuffer, AudioFormat, SampleRate};
pub use track::{Catalog, Track};
