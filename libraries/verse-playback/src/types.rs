//! Core types for the playback engine

use serde::{Deserialize, Serialize};

/// Transport state machine
///
/// `Idle` is initial; there is no terminal state, the transport is reusable
/// indefinitely. Natural completion lands back in `Paused` at position zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportState {
    /// No item loaded
    Idle,

    /// Source assignment in progress
    Loading,

    /// Currently playing
    Playing,

    /// Paused mid-item (or after natural completion)
    Paused,
}

impl TransportState {
    /// Whether the transport is paused (covers everything but `Playing`)
    pub fn is_paused(self) -> bool {
        self != Self::Playing
    }
}

/// Configuration for the transport
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportConfig {
    /// Initial volume (0-100, default: 80)
    pub volume: u8,

    /// Fallback tone frequency in Hz (default: 440.0)
    pub tone_frequency: f64,

    /// Fallback tone length in seconds (default: 0.25)
    pub tone_duration_secs: f64,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            volume: 80,
            tone_frequency: 440.0,
            tone_duration_secs: 0.25,
        }
    }
}

/// Snapshot of the current playback position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaybackPosition {
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,

    /// Total duration in seconds (0.0 while unknown)
    pub total_seconds: f64,
}

impl PlaybackPosition {
    /// Progress through the item, clamped to `[0, 1]`; `0.0` while the
    /// duration is unknown
    pub fn percent(&self) -> f64 {
        if self.total_seconds > 0.0 {
            (self.elapsed_seconds / self.total_seconds).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}
