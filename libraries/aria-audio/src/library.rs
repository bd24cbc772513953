//! Decoded track library
//!
//! Batch-decodes a whole catalog up front and keeps the results addressable
//! by catalog index. Decoding runs concurrently, one blocking task per
//! track, and completion order is unconstrained.

use crate::decoder::SymphoniaDecoder;
use aria_core::{AudioBuffer, AudioDecoder, Catalog};
use std::time::Duration;
use tokio::task::JoinSet;

/// A fully decoded track, ready for playback
#[derive(Debug, Clone)]
pub struct DecodedTrack {
    /// Decoded interleaved stereo samples
    pub buffer: AudioBuffer,

    /// Total track duration
    pub duration: Duration,
}

impl DecodedTrack {
    /// Wrap a decoded buffer, caching its duration
    pub fn new(buffer: AudioBuffer) -> Self {
        let duration = buffer.duration();
        Self { buffer, duration }
    }
}

/// Decoded buffers for a catalog, indexed by catalog position
///
/// Slots for tracks that failed to decode stay empty; playback of the
/// remaining tracks is unaffected. Read-only once loaded.
#[derive(Debug, Default)]
pub struct TrackLibrary {
    slots: Vec<Option<DecodedTrack>>,
}

impl TrackLibrary {
    /// Decode every catalog entry concurrently
    ///
    /// Per-track failures (missing file, unreadable container, codec error)
    /// are logged and recorded as empty slots; they never abort the batch.
    /// There is no batch timeout: a slow disk simply delays readiness.
    pub async fn load(catalog: &Catalog) -> Self {
        let mut tasks = JoinSet::new();

        for (index, track) in catalog.iter().enumerate() {
            let path = track.path.clone();
            tasks.spawn_blocking(move || {
                let mut decoder = SymphoniaDecoder::new();
                (index, decoder.decode(&path))
            });
        }

        let mut slots: Vec<Option<DecodedTrack>> = (0..catalog.len()).map(|_| None).collect();

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, Ok(buffer))) => {
                    let decoded = DecodedTrack::new(buffer);
                    tracing::debug!(
                        "decoded track {} ({:.1}s)",
                        index,
                        decoded.duration.as_secs_f64()
                    );
                    slots[index] = Some(decoded);
                }
                Ok((index, Err(e))) => {
                    let path = catalog.get(index).map(|t| t.path.display().to_string());
                    tracing::warn!(
                        "failed to decode track {} ({}): {}",
                        index,
                        path.unwrap_or_default(),
                        e
                    );
                }
                Err(e) => {
                    tracing::error!("decode task failed: {}", e);
                }
            }
        }

        Self { slots }
    }

    /// Build a library from pre-decoded slots
    ///
    /// Intended for embedders with their own decode pipeline and for tests.
    pub fn from_slots(slots: Vec<Option<DecodedTrack>>) -> Self {
        Self { slots }
    }

    /// Get the decoded buffer for a catalog index, if it loaded
    pub fn buffer_for(&self, index: usize) -> Option<&DecodedTrack> {
        self.slots.get(index).and_then(|slot| slot.as_ref())
    }

    /// Get the duration of a catalog index, if it loaded
    pub fn duration_of(&self, index: usize) -> Option<Duration> {
        self.buffer_for(index).map(|decoded| decoded.duration)
    }

    /// Number of slots (equals the catalog length)
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the library has no slots
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of tracks that decoded successfully
    pub fn available(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}
