/// Track and catalog domain types
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A playable track in the catalog
///
/// Tracks carry no identifier of their own: a track is identified by its
/// position in the [`Catalog`], and that order is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// File path for audio decoding
    pub path: PathBuf,

    /// Display title
    pub title: String,

    /// Artist name
    pub artist: String,
}

impl Track {
    /// Create a new track
    pub fn new(path: PathBuf, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            path,
            title: title.into(),
            artist: artist.into(),
        }
    }
}

/// The fixed, ordered list of playable tracks
///
/// Built once at startup and never mutated afterwards. Every other part of
/// the player addresses tracks by catalog index `0..len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    tracks: Vec<Track>,
}

impl Catalog {
    /// Create a catalog from an ordered list of tracks
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    /// Number of tracks in the catalog
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Get the track at a catalog index
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Iterate tracks in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Track;
    type IntoIter = std::slice::Iter<'a, Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.iter()
    }
}
