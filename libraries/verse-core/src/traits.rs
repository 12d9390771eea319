/// Core traits for Verse Player
use crate::error::Result;
use crate::types::MediaSource;
use std::time::Duration;

/// Platform audio-playback primitive
///
/// Implementers wrap whatever actually produces sound on a given platform
/// (an HTML audio element, a desktop output stream, an embedded DAC). The
/// transport drives exactly one backend and never touches the platform
/// directly.
///
/// # Concurrency
///
/// The model is single-threaded and cooperative: the backend's native
/// time-update and end-of-media events never preempt an in-progress transport
/// call. Adapters forward those events to the transport's
/// `handle_time_update` / `handle_media_ended` entry points between transport
/// operations.
#[async_trait::async_trait]
pub trait AudioBackend: Send {
    /// Assign a new media source, replacing any previous one
    ///
    /// This is the only genuine suspension point in the playback core: the
    /// future resolves once the backend has accepted the source. A well-behaved
    /// backend buffers a `play` issued before resolution.
    ///
    /// # Errors
    /// Returns an error if the backend cannot accept the source
    async fn set_source(&mut self, source: &MediaSource) -> Result<()>;

    /// Request playback start
    ///
    /// # Errors
    /// Returns an error if the backend refuses to start (e.g. an autoplay
    /// policy restriction). The refusal is reported, not retried.
    async fn play(&mut self) -> Result<()>;

    /// Request playback stop; idempotent
    fn pause(&mut self);

    /// Move the playback position
    fn seek(&mut self, position: Duration);

    /// Current playback position from start of media
    fn position(&self) -> Duration;

    /// Total media duration, `None` while metadata is not yet known
    fn duration(&self) -> Option<Duration>;

    /// Whether the backend is currently paused
    fn is_paused(&self) -> bool;

    /// Set the linear output gain (0.0 = silent, 1.0 = unity)
    fn set_gain(&mut self, gain: f32);
}
