//! Property-based tests for the playback controller
//!
//! Uses proptest to verify invariants across many random operation
//! sequences: the one-shot source discipline and the tick/state coupling
//! must hold no matter what the user mashes.

use aria_audio::{DecodedTrack, TrackLibrary};
use aria_core::{AudioBuffer, AudioFormat, Catalog, SampleRate, Track};
use aria_playback::{
    format_time, AudioBackend, AudioClock, PlaybackState, PlayerController, SourceHandle,
};
use proptest::prelude::*;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

// ===== Helpers =====

#[derive(Clone)]
struct ManualClock(Arc<Mutex<Duration>>);

impl AudioClock for ManualClock {
    fn now(&self) -> Duration {
        *self.0.lock().unwrap()
    }
}

#[derive(Clone, Default)]
struct CountingBackend {
    live: Arc<AtomicUsize>,
}

struct CountingHandle {
    live: Arc<AtomicUsize>,
    stopped: bool,
}

impl SourceHandle for CountingHandle {
    fn stop(&mut self) {
        if !self.stopped {
            self.stopped = true;
            self.live.fetch_sub(1, Ordering::SeqCst);
        }
    }
}

impl AudioBackend for CountingBackend {
    fn start(
        &mut self,
        _track: &DecodedTrack,
        _offset: Duration,
    ) -> aria_playback::Result<Box<dyn SourceHandle>> {
        self.live.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(CountingHandle {
            live: self.live.clone(),
            stopped: false,
        }))
    }
}

/// A low sample rate keeps multi-minute fixtures tiny
const TEST_RATE: u64 = 100;

fn silent_track(seconds: u64) -> DecodedTrack {
    let format = AudioFormat::new(SampleRate::new(TEST_RATE as u32), 2);
    DecodedTrack::new(AudioBuffer::new(
        vec![0.0; (seconds * TEST_RATE * 2) as usize],
        format,
    ))
}

/// Player operations a user (or a misbehaving UI) can fire in any order
#[derive(Debug, Clone)]
enum Op {
    Play(usize),
    Toggle,
    Stop,
    Seek(usize, u16),
    Advance(u16),
    Tick,
    BeginDrag,
    DragTo(i8),
    EndDrag(i8),
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..5).prop_map(Op::Play), // index 4 is out of bounds on purpose
        Just(Op::Toggle),
        Just(Op::Stop),
        ((0usize..5), 0u16..400).prop_map(|(i, s)| Op::Seek(i, s)),
        (0u16..200).prop_map(Op::Advance),
        Just(Op::Tick),
        Just(Op::BeginDrag),
        (-20i8..=120).prop_map(Op::DragTo),
        (-20i8..=120).prop_map(Op::EndDrag),
    ]
}

/// Four catalog entries, 300s each, slot 2 unavailable
fn build_player() -> (PlayerController, ManualClock, CountingBackend) {
    let catalog = Catalog::new(
        (0..4)
            .map(|i| {
                Track::new(
                    PathBuf::from(format!("/music/{i}.mp3")),
                    format!("Track {i}"),
                    "Artist",
                )
            })
            .collect(),
    );
    let library = TrackLibrary::from_slots(
        (0..4)
            .map(|i| if i == 2 { None } else { Some(silent_track(300)) })
            .collect(),
    );

    let clock = ManualClock(Arc::new(Mutex::new(Duration::ZERO)));
    let backend = CountingBackend::default();
    let controller = PlayerController::new(
        catalog,
        library,
        Box::new(clock.clone()),
        Box::new(backend.clone()),
        Box::new(aria_playback::NullSurface),
    );
    (controller, clock, backend)
}

// ===== Property Tests =====

proptest! {
    /// Property: no operation sequence can leak a source handle or leave the
    /// tick loop running without playback
    #[test]
    fn source_and_tick_discipline_holds(ops in prop::collection::vec(arbitrary_op(), 0..50)) {
        let (mut player, clock, backend) = build_player();

        for op in ops {
            match op {
                Op::Play(index) => {
                    let result = player.play_or_toggle(index);
                    if result.is_ok() {
                        // A successful play forgets every other paused offset
                        for other in 0..4 {
                            if Some(other) != player.active_index() {
                                prop_assert_eq!(
                                    player.paused_offset(other),
                                    Some(Duration::ZERO)
                                );
                            }
                        }
                    }
                }
                Op::Toggle => {
                    let _ = player.toggle_pause_resume();
                }
                Op::Stop => player.stop_current(),
                Op::Seek(index, secs) => {
                    let _ = player.seek_to(index, Duration::from_secs(u64::from(secs)));
                }
                Op::Advance(secs) => {
                    *clock.0.lock().unwrap() += Duration::from_secs(u64::from(secs));
                }
                Op::Tick => player.tick(),
                Op::BeginDrag => player.begin_drag(),
                Op::DragTo(pct) => player.drag_to(f64::from(pct) / 100.0),
                Op::EndDrag(pct) => {
                    let _ = player.end_drag(f64::from(pct) / 100.0);
                }
            }

            // At most one live source, and exactly one while playing
            let expected_live = usize::from(player.state() == PlaybackState::Playing);
            prop_assert_eq!(backend.live.load(Ordering::SeqCst), expected_live);

            // The tick loop runs exactly while playing
            prop_assert_eq!(player.is_ticking(), player.state() == PlaybackState::Playing);

            // Playing or paused implies an active track
            if player.state() != PlaybackState::Idle {
                prop_assert!(player.active_index().is_some());
            }

            // The unavailable slot can never become active
            prop_assert_ne!(player.active_index(), Some(2));
        }

        // Whatever happened, stopping always cleans up completely
        player.stop_current();
        prop_assert_eq!(backend.live.load(Ordering::SeqCst), 0);
        prop_assert!(!player.is_ticking());
    }

    /// Property: pausing after a play preserves the clock delta as the
    /// track's resume offset
    #[test]
    fn pause_offset_matches_clock_delta(secs in 0u64..280) {
        let (mut player, clock, _backend) = build_player();

        player.play_or_toggle(0).unwrap();
        *clock.0.lock().unwrap() += Duration::from_secs(secs);
        player.toggle_pause_resume().unwrap();

        prop_assert_eq!(player.paused_offset(0), Some(Duration::from_secs(secs)));
        prop_assert_eq!(player.elapsed(), Duration::from_secs(secs));
    }

    /// Property: elapsed time formatting always renders M:SS with padded
    /// seconds under a minute
    #[test]
    fn format_time_renders_m_ss(millis in 0u64..7_200_000) {
        let rendered = format_time(Duration::from_millis(millis));

        let total_secs = millis / 1000;
        let expected = format!("{}:{:02}", total_secs / 60, total_secs % 60);
        prop_assert_eq!(rendered, expected);
    }
}
