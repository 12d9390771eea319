//! Verse Player - Playback Engine
//!
//! Platform-agnostic playback state machine for Verse Player.
//!
//! This crate provides:
//! - Item catalog with a wrapping cursor (next/previous/lookup)
//! - Transport state machine (load, play, pause, toggle, seek)
//! - Single-slot time-update and completion callbacks
//! - Synthetic fallback tone for items without audio sources
//! - Volume control (logarithmic, 0-100%, mute/unmute)
//!
//! # Architecture
//!
//! `verse-playback` never talks to a platform directly. The actual audio
//! primitive (an HTML audio element, a desktop output stream) is provided via
//! the [`AudioBackend`](verse_core::AudioBackend) trait from `verse-core`;
//! the presentation layer subscribes through
//! [`Transport::on_time`]/[`Transport::on_end`] and re-renders from those.
//!
//! # Example: Catalog navigation
//!
//! ```rust
//! use verse_core::types::Item;
//! use verse_playback::Catalog;
//!
//! let mut catalog = Catalog::new(vec![
//!     Item::new("a", "First Light").with_source("media/a.mp3"),
//!     Item::new("b", "Riverbed"),
//!     Item::new("c", "Harbor"),
//! ]);
//!
//! assert_eq!(catalog.current().unwrap().id(), "a");
//! assert_eq!(catalog.next().unwrap().id(), "b");
//!
//! // Any integer wraps into range, negative included
//! catalog.set_cursor(-1);
//! assert_eq!(catalog.current().unwrap().id(), "c");
//! ```
//!
//! # Example: Driving the transport
//!
//! ```rust,no_run
//! use verse_core::{AudioBackend, types::Item};
//! use verse_playback::Transport;
//!
//! # async fn run(backend: impl AudioBackend) -> verse_playback::Result<()> {
//! let mut transport = Transport::new(backend);
//!
//! transport.on_time(|update| {
//!     println!("{:.0}% played", update.percent * 100.0);
//! });
//! transport.on_end(|| println!("finished"));
//!
//! let item = Item::new("a", "First Light").with_source("media/a.mp3");
//! transport.load(Some(&item)).await?;
//! transport.play().await?;
//! # Ok(())
//! # }
//! ```

mod catalog;
mod error;
pub mod events;
mod tone;
mod transport;
pub mod types;
mod volume;

// Public exports
pub use catalog::Catalog;
pub use error::{PlaybackError, Result};
pub use events::{TimeUpdate, TransportEvent};
pub use tone::{ToneSpec, TONE_AMPLITUDE, TONE_SAMPLE_RATE};
pub use transport::Transport;
pub use types::{PlaybackPosition, TransportConfig, TransportState};
pub use volume::Volume;
