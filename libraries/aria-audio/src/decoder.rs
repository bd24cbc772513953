/// Audio decoder implementation using Symphonia
use crate::error::{AudioError, Result};
use aria_core::{AudioBuffer, AudioDecoder as AudioDecoderTrait, AudioFormat, SampleRate};
use std::path::Path;
use symphonia::core::audio::{AudioBufferRef, Signal};
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

/// ITU-R BS.775-1 coefficient (-3dB) for center/surround channels
const REAR_MIX: f32 = 0.707;

/// Audio decoder using Symphonia
///
/// Supports: MP3, FLAC, OGG, WAV, AAC, M4A
///
/// Decodes a whole file into a single interleaved stereo f32 buffer. Mono
/// input is duplicated to both channels; multichannel input is downmixed.
pub struct SymphoniaDecoder;

impl SymphoniaDecoder {
    /// Create a new decoder
    pub fn new() -> Self {
        Self
    }

    fn decode_inner(path: &Path) -> Result<AudioBuffer> {
        if !path.exists() {
            return Err(AudioError::FileNotFound(path.display().to_string()));
        }

        let file = std::fs::File::open(path)?;
        let mss = MediaSourceStream::new(Box::new(file), Default::default());

        // Hint the format registry with the file extension
        let mut hint = Hint::new();
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            hint.with_extension(ext);
        }

        let probed = symphonia::default::get_probe()
            .format(
                &hint,
                mss,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(|e| AudioError::Symphonia(format!("Failed to probe file: {}", e)))?;

        let mut format = probed.format;

        let track = format
            .default_track()
            .ok_or_else(|| AudioError::DecodeError("No audio tracks found".to_string()))?;

        let sample_rate = track.codec_params.sample_rate.unwrap_or(44_100);
        let track_id = track.id;

        let mut decoder = symphonia::default::get_codecs()
            .make(&track.codec_params, &DecoderOptions::default())
            .map_err(|e| AudioError::Symphonia(format!("Failed to create decoder: {}", e)))?;

        let mut samples = Vec::new();

        loop {
            let packet = match format.next_packet() {
                Ok(packet) => packet,
                Err(symphonia::core::errors::Error::IoError(e))
                    if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    break;
                }
                Err(e) => {
                    return Err(AudioError::Symphonia(format!("Error reading packet: {}", e)));
                }
            };

            if packet.track_id() != track_id {
                continue;
            }

            let decoded = match decoder.decode(&packet) {
                Ok(decoded) => decoded,
                Err(symphonia::core::errors::Error::DecodeError(e)) => {
                    // Recoverable per-packet corruption; skip the packet
                    tracing::warn!("recoverable decode error in {}: {}", path.display(), e);
                    continue;
                }
                Err(e) => {
                    return Err(AudioError::DecodeError(format!("Decode error: {}", e)));
                }
            };

            Self::append_stereo(decoded, &mut samples);
        }

        if samples.is_empty() {
            return Err(AudioError::DecodeError(format!(
                "No decodable audio in {}",
                path.display()
            )));
        }

        let format = AudioFormat::new(SampleRate::new(sample_rate), 2);
        Ok(AudioBuffer::new(samples, format))
    }

    /// Convert a decoded Symphonia buffer to interleaved stereo f32 and
    /// append it to `out`
    ///
    /// Signed integers use symmetric scaling (divide by 2^(N-1)) so the
    /// [-1.0, 1.0] range is symmetric; unsigned formats are centered on zero.
    fn append_stereo(decoded: AudioBufferRef, out: &mut Vec<f32>) {
        match decoded {
            AudioBufferRef::F32(buf) => Self::downmix(&buf, |s| s.clamp(-1.0, 1.0), out),
            AudioBufferRef::F64(buf) => {
                Self::downmix(&buf, |s| (s as f32).clamp(-1.0, 1.0), out);
            }
            AudioBufferRef::S32(buf) => {
                Self::downmix(&buf, |s| s as f32 / 2_147_483_648.0, out);
            }
            AudioBufferRef::S24(buf) => {
                Self::downmix(&buf, |s| s.inner() as f32 / 8_388_608.0, out);
            }
            AudioBufferRef::S16(buf) => Self::downmix(&buf, |s| f32::from(s) / 32_768.0, out),
            AudioBufferRef::S8(buf) => Self::downmix(&buf, |s| f32::from(s) / 128.0, out),
            AudioBufferRef::U32(buf) => {
                Self::downmix(&buf, |s| (s as f32 / u32::MAX as f32) * 2.0 - 1.0, out);
            }
            AudioBufferRef::U24(buf) => {
                Self::downmix(&buf, |s| (s.inner() as f32 / 16_777_215.0) * 2.0 - 1.0, out);
            }
            AudioBufferRef::U16(buf) => {
                Self::downmix(&buf, |s| (f32::from(s) / f32::from(u16::MAX)) * 2.0 - 1.0, out);
            }
            AudioBufferRef::U8(buf) => {
                Self::downmix(&buf, |s| (f32::from(s) / f32::from(u8::MAX)) * 2.0 - 1.0, out);
            }
        }
    }

    /// Downmix any channel layout to interleaved stereo
    ///
    /// Mono duplicates to both channels; stereo passes through; anything
    /// wider keeps the front pair and folds every remaining channel into
    /// both sides at -3dB.
    fn downmix<T, F>(
        buf: &symphonia::core::audio::AudioBuffer<T>,
        normalize: F,
        out: &mut Vec<f32>,
    ) where
        T: symphonia::core::sample::Sample + Copy,
        F: Fn(T) -> f32,
    {
        let frames = buf.frames();
        let channels = buf.spec().channels.count();
        out.reserve(frames * 2);

        match channels {
            0 => out.extend(std::iter::repeat(0.0).take(frames * 2)),
            1 => {
                let mono = buf.chan(0);
                for i in 0..frames {
                    let sample = normalize(mono[i]);
                    out.push(sample);
                    out.push(sample);
                }
            }
            2 => {
                let left = buf.chan(0);
                let right = buf.chan(1);
                for i in 0..frames {
                    out.push(normalize(left[i]));
                    out.push(normalize(right[i]));
                }
            }
            _ => {
                for i in 0..frames {
                    let mut left = normalize(buf.chan(0)[i]);
                    let mut right = normalize(buf.chan(1)[i]);
                    for ch in 2..channels {
                        let folded = normalize(buf.chan(ch)[i]) * REAR_MIX;
                        left += folded;
                        right += folded;
                    }
                    out.push(left.clamp(-1.0, 1.0));
                    out.push(right.clamp(-1.0, 1.0));
                }
            }
        }
    }
}

impl Default for SymphoniaDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioDecoderTrait for SymphoniaDecoder {
    fn decode(&mut self, path: &Path) -> aria_core::Result<AudioBuffer> {
        Ok(Self::decode_inner(path)?)
    }

    fn supports_format(&self, path: &Path) -> bool {
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            matches!(
                ext.to_lowercase().as_str(),
                "mp3" | "flac" | "ogg" | "opus" | "wav" | "m4a" | "aac"
            )
        } else {
            false
        }
    }
}
