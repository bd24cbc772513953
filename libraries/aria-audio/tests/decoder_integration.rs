//! Integration tests for decoding and batch loading
//!
//! Fixtures are real WAV files generated with hound, so these tests
//! exercise the whole Symphonia path: probe, packet loop, and sample
//! conversion.

use aria_audio::{SymphoniaDecoder, TrackLibrary};
use aria_core::types::{Catalog, Track};
use aria_core::AudioDecoder;
use std::f32::consts::TAU;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;

const SAMPLE_RATE: u32 = 44_100;

/// Write a sine-wave WAV fixture and return its path
fn write_sine_wav(dir: &Path, name: &str, channels: u16, seconds: f32) -> PathBuf {
    let path = dir.join(name);
    let spec = hound::WavSpec {
        channels,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(&path, spec).expect("create wav");
    let frames = (seconds * SAMPLE_RATE as f32) as u32;
    for n in 0..frames {
        let t = n as f32 / SAMPLE_RATE as f32;
        let sample = (0.5 * (TAU * 440.0 * t).sin() * f32::from(i16::MAX)) as i16;
        for _ in 0..channels {
            writer.write_sample(sample).expect("write sample");
        }
    }
    writer.finalize().expect("finalize wav");

    path
}

#[test]
fn decode_stereo_wav() {
    let dir = TempDir::new().unwrap();
    let path = write_sine_wav(dir.path(), "stereo.wav", 2, 0.5);

    let mut decoder = SymphoniaDecoder::new();
    let buffer = decoder.decode(&path).expect("decode stereo wav");

    assert_eq!(buffer.format.channels, 2);
    assert_eq!(buffer.format.sample_rate.as_hz(), SAMPLE_RATE);
    assert_eq!(buffer.frames(), (SAMPLE_RATE / 2) as usize);
    assert!((buffer.duration_secs() - 0.5).abs() < 0.01);

    // Samples must be normalized
    assert!(buffer.samples.iter().all(|s| (-1.0..=1.0).contains(s)));
    // A sine at half amplitude is clearly non-silent
    assert!(buffer.samples.iter().any(|s| s.abs() > 0.4));
}

#[test]
fn decode_mono_wav_duplicates_channels() {
    let dir = TempDir::new().unwrap();
    let path = write_sine_wav(dir.path(), "mono.wav", 1, 0.25);

    let mut decoder = SymphoniaDecoder::new();
    let buffer = decoder.decode(&path).expect("decode mono wav");

    // Output is always interleaved stereo
    assert_eq!(buffer.format.channels, 2);
    assert_eq!(buffer.frames(), (SAMPLE_RATE / 4) as usize);
    for frame in buffer.samples.chunks_exact(2) {
        assert_eq!(frame[0], frame[1]);
    }
}

#[test]
fn decode_garbage_bytes_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("noise.wav");
    std::fs::write(&path, b"this is not a riff container at all").unwrap();

    let mut decoder = SymphoniaDecoder::new();
    assert!(decoder.decode(&path).is_err());
}

#[tokio::test]
async fn load_catalog_tolerates_bad_tracks() {
    // Surface the loader's warn-and-continue logging in test output
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let dir = TempDir::new().unwrap();
    let good_a = write_sine_wav(dir.path(), "a.wav", 2, 0.2);
    let good_b = write_sine_wav(dir.path(), "b.wav", 1, 0.3);

    let catalog = Catalog::new(vec![
        Track::new(good_a, "A", "Artist"),
        Track::new(dir.path().join("missing.wav"), "Missing", "Artist"),
        Track::new(good_b, "B", "Artist"),
    ]);

    let library = TrackLibrary::load(&catalog).await;

    // The bad slot is empty; the good slots landed at their catalog indices
    assert_eq!(library.len(), 3);
    assert_eq!(library.available(), 2);
    assert!(library.buffer_for(0).is_some());
    assert!(library.buffer_for(1).is_none());
    assert!(library.buffer_for(2).is_some());

    let duration_b = library.duration_of(2).unwrap();
    assert!((duration_b.as_secs_f64() - 0.3).abs() < 0.01);
    assert_eq!(library.duration_of(1), None);
}

#[tokio::test]
async fn load_empty_catalog() {
    let library = TrackLibrary::load(&Catalog::default()).await;
    assert!(library.is_empty());
    assert_eq!(library.available(), 0);
    assert_eq!(library.duration_of(0), None);
}

#[test]
fn library_duration_matches_decoder() {
    let dir = TempDir::new().unwrap();
    let path = write_sine_wav(dir.path(), "one.wav", 2, 1.0);

    let mut decoder = SymphoniaDecoder::new();
    let buffer = decoder.decode(&path).expect("decode wav");
    let decoded = aria_audio::DecodedTrack::new(buffer);

    assert_eq!(decoded.duration, Duration::from_secs(1));
}
