//! Playback controller - core state machine
//!
//! Owns "which track, what position, playing or paused" and the tick loop
//! that advances the seek display and detects end-of-track. All transitions
//! happen on discrete calls (an operation or a tick), so the controller is
//! single-threaded and lock-free.

use crate::{
    backend::{AudioBackend, SourceHandle},
    clock::AudioClock,
    error::{PlayerError, Result},
    events::PlayerEvent,
    surface::Surface,
    types::{format_time, ButtonLabel, PlaybackState},
};
use aria_audio::TrackLibrary;
use aria_core::Catalog;
use std::time::Duration;

/// Central playback controller
///
/// Drives the whole player:
/// - Start/pause/resume/switch via [`play_or_toggle`](Self::play_or_toggle)
///   and [`toggle_pause_resume`](Self::toggle_pause_resume)
/// - Seeking, both programmatic ([`seek_to`](Self::seek_to)) and interactive
///   ([`begin_drag`](Self::begin_drag) / [`drag_to`](Self::drag_to) /
///   [`end_drag`](Self::end_drag))
/// - The per-frame [`tick`](Self::tick) that renders elapsed time and the
///   seek fraction and stops playback at natural end
///
/// The backing audio primitive is one-shot, so every transition that changes
/// position tears down the live handle and starts a fresh one. The paused
/// offset of a track survives only until some *other* track is acted upon:
/// the player remembers a resume position for the single most recently
/// touched track.
pub struct PlayerController {
    // Immutable inputs
    catalog: Catalog,
    library: TrackLibrary,

    // Platform collaborators
    clock: Box<dyn AudioClock>,
    backend: Box<dyn AudioBackend>,
    surface: Box<dyn Surface>,

    // State
    state: PlaybackState,
    active_index: Option<usize>,
    paused_offsets: Vec<Duration>,
    handle: Option<Box<dyn SourceHandle>>,

    // Clock bookkeeping: elapsed = start_offset + (clock.now() - started_at)
    started_at: Duration,
    start_offset: Duration,

    // Tick loop and interactive seek
    ticking: bool,
    dragging: bool,

    // Event queue for UI synchronization
    pending_events: Vec<PlayerEvent>,
}

impl PlayerController {
    /// Create a controller for a loaded catalog
    pub fn new(
        catalog: Catalog,
        library: TrackLibrary,
        clock: Box<dyn AudioClock>,
        backend: Box<dyn AudioBackend>,
        surface: Box<dyn Surface>,
    ) -> Self {
        let paused_offsets = vec![Duration::ZERO; catalog.len()];
        Self {
            catalog,
            library,
            clock,
            backend,
            surface,
            state: PlaybackState::Idle,
            active_index: None,
            paused_offsets,
            handle: None,
            started_at: Duration::ZERO,
            start_offset: Duration::ZERO,
            ticking: false,
            dragging: false,
            pending_events: Vec::new(),
        }
    }

    // ===== Playback Control =====

    /// Play a track, or pause it if it is already playing
    ///
    /// - Different track (or same track while not playing): stops whatever
    ///   is active and starts `index` from its stored paused offset.
    /// - Same track while playing: pauses it.
    ///
    /// Whichever branch runs, the paused offsets of all *other* tracks are
    /// forgotten afterwards.
    ///
    /// # Errors
    /// `IndexOutOfBounds` for an index outside the catalog;
    /// `TrackUnavailable` when the track has no decoded buffer.
    pub fn play_or_toggle(&mut self, index: usize) -> Result<()> {
        if index >= self.catalog.len() {
            return Err(PlayerError::IndexOutOfBounds(index));
        }
        if self.library.buffer_for(index).is_none() {
            return Err(PlayerError::TrackUnavailable(index));
        }

        if self.active_index == Some(index) && self.state == PlaybackState::Playing {
            self.toggle_pause_resume()?;
        } else {
            self.stop_current();
            let offset = self.paused_offsets[index];
            self.begin_track(index, offset)?;
        }

        self.forget_other_offsets(index);
        Ok(())
    }

    /// Pause the active track, or resume it if paused
    ///
    /// No-op when nothing is active.
    pub fn toggle_pause_resume(&mut self) -> Result<()> {
        if self.state == PlaybackState::Playing {
            let Some(index) = self.active_index else {
                return Ok(());
            };
            let position = self.elapsed_now();
            self.teardown_handle();
            self.paused_offsets[index] = position;
            self.ticking = false;
            self.set_state(PlaybackState::Paused);
            self.surface.set_button(index, ButtonLabel::Resume);
            tracing::debug!("paused track {} at {:?}", index, position);
        } else if let Some(index) = self.active_index {
            let offset = self.paused_offsets[index];
            self.start_source(index, offset)?;
            self.surface.set_button(index, ButtonLabel::Pause);
            self.ticking = true;
            tracing::debug!("resumed track {} from {:?}", index, offset);
        }
        Ok(())
    }

    /// Stop the active track, if any
    ///
    /// Tears down the live handle (snapshotting its elapsed time), resets
    /// the track's button, clears the active index, and cancels the tick
    /// loop. Runs before any new track starts and at natural end-of-track.
    pub fn stop_current(&mut self) {
        if self.handle.is_some() {
            let position = self.elapsed_now();
            self.teardown_handle();
            if let Some(index) = self.active_index {
                self.paused_offsets[index] = position;
                self.emit(PlayerEvent::TrackStopped { index, position });
            }
        }

        self.ticking = false;
        if let Some(index) = self.active_index.take() {
            self.surface.set_button(index, ButtonLabel::PlayNow);
        }
        self.set_state(PlaybackState::Idle);
    }

    // ===== Seek =====

    /// Seek a track to a target position
    ///
    /// Stores the target as the track's paused offset. While playing this
    /// restarts `index` at the target (the live source cannot be rewound in
    /// place); otherwise it only re-renders the seek display.
    ///
    /// The target is not clamped: the caller derives it from a bar fraction
    /// times the track duration.
    ///
    /// # Errors
    /// `IndexOutOfBounds` for an index outside the catalog;
    /// `TrackUnavailable` when the track has no decoded buffer.
    pub fn seek_to(&mut self, index: usize, target: Duration) -> Result<()> {
        if index >= self.catalog.len() {
            return Err(PlayerError::IndexOutOfBounds(index));
        }
        let Some(total) = self.library.duration_of(index) else {
            return Err(PlayerError::TrackUnavailable(index));
        };

        if self.state == PlaybackState::Playing {
            self.stop_current();
            self.begin_track(index, target)?;
        } else {
            self.surface.show_elapsed(&format_time(target));
            self.surface
                .set_seek_fraction(target.as_secs_f64() / total.as_secs_f64());
        }

        self.paused_offsets[index] = target;
        Ok(())
    }

    // ===== Interactive Seek (drag) =====

    /// Enter interactive seek mode; tick rendering is suspended until
    /// [`end_drag`](Self::end_drag)
    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    /// Render the drag position without touching playback
    ///
    /// `fraction` is the pointer position as a fraction of the bar width;
    /// values outside `0..=1` pin to the ends.
    pub fn drag_to(&mut self, fraction: f64) {
        let Some(target) = self.drag_target(fraction) else {
            return;
        };
        self.surface.show_elapsed(&format_time(target));
        self.surface.set_seek_fraction(fraction.clamp(0.0, 1.0));
    }

    /// Leave interactive seek mode
    ///
    /// While playing, restarts the active track at the released position;
    /// otherwise the static display just stays where the drag left it.
    pub fn end_drag(&mut self, fraction: f64) -> Result<()> {
        self.dragging = false;
        let Some(index) = self.active_index else {
            return Ok(());
        };
        let Some(target) = self.drag_target(fraction) else {
            return Ok(());
        };
        self.seek_to(index, target)
    }

    /// Check if an interactive seek is in progress
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Resolve a pointer fraction to a seek target within the active track.
    ///
    /// Returns `None` when nothing is active; otherwise the fraction is
    /// pinned to `0..=1` and scaled by the track duration.
    fn drag_target(&self, fraction: f64) -> Option<Duration> {
        let index = self.active_index?;
        let total = self.library.duration_of(index)?;
        Some(total.mul_f64(fraction.clamp(0.0, 1.0)))
    }

    // ===== Tick Loop =====

    /// Advance the seek display by one frame
    ///
    /// Call once per display frame while [`is_ticking`](Self::is_ticking).
    /// Renders the elapsed time as `M:SS` and the seek fraction, and stops
    /// the track when the fraction reaches 1.0 (natural end). Does nothing
    /// while paused, idle, or mid-drag.
    pub fn tick(&mut self) {
        if !self.ticking || self.dragging {
            return;
        }
        let Some(index) = self.active_index else {
            return;
        };
        let Some(total) = self.library.duration_of(index) else {
            return;
        };

        let elapsed = self.elapsed_now();
        self.surface.show_elapsed(&format_time(elapsed));
        let fraction = elapsed.as_secs_f64() / total.as_secs_f64();
        self.surface.set_seek_fraction(fraction);

        if fraction >= 1.0 {
            self.emit(PlayerEvent::TrackFinished { index });
            self.stop_current();
        }
    }

    /// Whether the embedder should keep scheduling [`tick`](Self::tick)
    ///
    /// True exactly while a track is playing. A tick that keeps firing after
    /// playback stopped is the resource leak this flag exists to prevent.
    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    // ===== State Queries =====

    /// Current playback state
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Catalog index of the active track, if any
    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    /// Elapsed time into the active track
    ///
    /// While playing this advances with the clock; while paused it is the
    /// stored paused offset; idle is zero.
    pub fn elapsed(&self) -> Duration {
        match self.state {
            PlaybackState::Playing => self.elapsed_now(),
            PlaybackState::Paused => self
                .active_index
                .map(|index| self.paused_offsets[index])
                .unwrap_or_default(),
            PlaybackState::Idle => Duration::ZERO,
        }
    }

    /// Stored paused offset for a catalog index
    pub fn paused_offset(&self, index: usize) -> Option<Duration> {
        self.paused_offsets.get(index).copied()
    }

    /// The catalog this controller plays from
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The decoded library backing playback
    pub fn library(&self) -> &TrackLibrary {
        &self.library
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns everything emitted since the last drain. The embedder should
    /// call this once per frame to synchronize its UI.
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internal =====

    /// The start branch: bind and start a source, then render the transport
    /// bar and all button labels
    fn begin_track(&mut self, index: usize, offset: Duration) -> Result<()> {
        let total = self.start_source(index, offset)?;

        if let Some(track) = self.catalog.get(index) {
            self.surface.show_track(&track.title, &track.artist, total);
        }

        self.surface.set_button(index, ButtonLabel::Pause);
        for other in 0..self.catalog.len() {
            if other != index {
                self.surface.set_button(other, ButtonLabel::PlayNow);
            }
        }

        self.ticking = true;
        tracing::debug!("started track {} at {:?}", index, offset);
        Ok(())
    }

    /// Create a fresh one-shot source for `index` at `offset` and take
    /// ownership of its handle
    fn start_source(&mut self, index: usize, offset: Duration) -> Result<Duration> {
        let track = self
            .library
            .buffer_for(index)
            .ok_or(PlayerError::TrackUnavailable(index))?;
        let total = track.duration;
        let handle = self.backend.start(track, offset)?;

        self.handle = Some(handle);
        self.active_index = Some(index);
        self.started_at = self.clock.now();
        self.start_offset = offset;
        self.set_state(PlaybackState::Playing);
        self.emit(PlayerEvent::TrackStarted { index, offset });
        Ok(total)
    }

    /// Stop and drop the live handle, if any
    fn teardown_handle(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.stop();
        }
    }

    /// Elapsed time of the live source
    fn elapsed_now(&self) -> Duration {
        self.start_offset + self.clock.now().saturating_sub(self.started_at)
    }

    /// Forget the paused offsets of every track except `index`
    fn forget_other_offsets(&mut self, index: usize) {
        for (other, offset) in self.paused_offsets.iter_mut().enumerate() {
            if other != index {
                *offset = Duration::ZERO;
            }
        }
    }

    fn set_state(&mut self, state: PlaybackState) {
        if self.state != state {
            self.state = state;
            self.emit(PlayerEvent::StateChanged { state });
        }
    }

    fn emit(&mut self, event: PlayerEvent) {
        self.pending_events.push(event);
    }
}
