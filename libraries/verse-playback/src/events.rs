//! Playback events
//!
//! Payloads handed to the presentation layer. Delivery is the single-slot
//! callback contract on the transport: one time handler and one completion
//! handler at a time, last registration wins.

use crate::types::TransportState;
use serde::{Deserialize, Serialize};

/// Payload of a time-update notification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeUpdate {
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,

    /// Total duration in seconds (0.0 while unknown)
    pub total_seconds: f64,

    /// Progress in `[0, 1]`; 0.0 while the duration is unknown
    pub percent: f64,
}

/// Events emitted by the playback system
///
/// A richer surface than the raw callbacks, for adapters that forward state
/// to a UI process wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TransportEvent {
    /// Transport state changed (loading, playing, paused, idle)
    StateChanged {
        /// The new transport state
        state: TransportState,
    },

    /// A new item finished loading and is ready to play
    ItemLoaded {
        /// ID of the loaded item, `None` for an item-less fallback load
        item_id: Option<String>,
    },

    /// The current item finished playing naturally (reached end of media)
    PlaybackFinished {
        /// ID of the finished item, if one was loaded
        item_id: Option<String>,
    },
}
