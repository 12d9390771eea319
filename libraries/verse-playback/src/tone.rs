//! Synthetic fallback tone
//!
//! When an item has no audio source the transport plays a short generated
//! tone instead of failing silently. Generation is pure: the same parameters
//! always yield byte-identical WAV output.

use serde::{Deserialize, Serialize};
use verse_core::types::MediaSource;

/// Sample rate of the fallback tone in Hz
pub const TONE_SAMPLE_RATE: u32 = 8000;

/// Amplitude of the fallback tone as a fraction of full range
pub const TONE_AMPLITUDE: f64 = 0.35;

/// Parameters for a synthesized sine tone
///
/// Rendered as mono 8-bit unsigned PCM in a canonical 44-byte RIFF/WAVE
/// container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToneSpec {
    /// Sample rate in Hz
    pub sample_rate: u32,

    /// Tone length in seconds
    pub duration_secs: f64,

    /// Sine frequency in Hz
    pub frequency: f64,

    /// Amplitude as a fraction of full range (0.0-1.0)
    pub amplitude: f64,
}

impl Default for ToneSpec {
    fn default() -> Self {
        Self {
            sample_rate: TONE_SAMPLE_RATE,
            duration_secs: 0.25,
            frequency: 440.0,
            amplitude: TONE_AMPLITUDE,
        }
    }
}

impl ToneSpec {
    /// Number of PCM samples the tone renders to
    pub fn sample_count(&self) -> usize {
        (self.sample_rate as f64 * self.duration_secs).floor() as usize
    }

    /// Render the tone as complete WAV container bytes
    ///
    /// Samples follow `floor(sin(2π·f·i/rate) · amplitude · 255 + 0.5 · 255)`,
    /// a sine biased to the unsigned 8-bit midpoint.
    pub fn render(&self) -> Vec<u8> {
        let data_len = self.sample_count();
        let mut bytes = Vec::with_capacity(44 + data_len);

        let sample_rate = self.sample_rate;
        let channels: u16 = 1;
        let bits_per_sample: u16 = 8;
        let byte_rate = sample_rate * channels as u32 * (bits_per_sample as u32 / 8);
        let block_align = channels * (bits_per_sample / 8);

        // RIFF header
        bytes.extend_from_slice(b"RIFF");
        bytes.extend_from_slice(&(36 + data_len as u32).to_le_bytes());
        bytes.extend_from_slice(b"WAVE");

        // fmt chunk
        bytes.extend_from_slice(b"fmt ");
        bytes.extend_from_slice(&16u32.to_le_bytes()); // chunk size
        bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM format
        bytes.extend_from_slice(&channels.to_le_bytes());
        bytes.extend_from_slice(&sample_rate.to_le_bytes());
        bytes.extend_from_slice(&byte_rate.to_le_bytes());
        bytes.extend_from_slice(&block_align.to_le_bytes());
        bytes.extend_from_slice(&bits_per_sample.to_le_bytes());

        // data chunk
        bytes.extend_from_slice(b"data");
        bytes.extend_from_slice(&(data_len as u32).to_le_bytes());

        for i in 0..data_len {
            let phase = std::f64::consts::TAU * self.frequency * i as f64 / sample_rate as f64;
            let value = phase.sin() * self.amplitude * 255.0 + 0.5 * 255.0;
            bytes.push(value.floor() as u8);
        }

        bytes
    }

    /// Render the tone as a backend-loadable media source
    pub fn to_media_source(&self) -> MediaSource {
        MediaSource::buffer("audio/wav", self.render())
    }
}
