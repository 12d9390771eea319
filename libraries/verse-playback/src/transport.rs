//! Transport - playback engine
//!
//! Owns one audio backend, tracks the playback state machine
//! (`Idle -> Loading -> Playing <-> Paused`), and maps the backend's two
//! native event sources (time update, end of media) onto the single-slot
//! callbacks the presentation layer registers.

use crate::{
    error::{PlaybackError, Result},
    events::{TimeUpdate, TransportEvent},
    tone::ToneSpec,
    types::{PlaybackPosition, TransportConfig, TransportState},
    volume::Volume,
};
use std::time::Duration;
use tracing::{debug, warn};
use verse_core::{types::Item, types::MediaSource, AudioBackend};

/// Single-slot time-update handler
type TimeHandler = Box<dyn FnMut(TimeUpdate) + Send>;

/// Single-slot completion handler
type EndHandler = Box<dyn FnMut() + Send>;

/// Playback engine over one audio backend
///
/// At most one source is live at a time; a new [`load`](Transport::load)
/// replaces whatever came before it, which is also the cancellation mechanism
/// for an in-flight load (drop the prior future, issue a new one). The
/// transport is reusable indefinitely, there is no terminal state.
pub struct Transport<B: AudioBackend> {
    backend: B,

    // State
    state: TransportState,
    current_item: Option<Item>,
    active_source: Option<MediaSource>,
    elapsed: Duration,
    total: Duration,

    // Settings
    volume: Volume,
    fallback_tone: ToneSpec,

    // Registered handlers (one of each, last registration wins)
    on_time: Option<TimeHandler>,
    on_end: Option<EndHandler>,

    // Event queue for UI synchronization
    pending_events: Vec<TransportEvent>,
}

impl<B: AudioBackend> Transport<B> {
    /// Create a transport over the given backend with default configuration
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, TransportConfig::default())
    }

    /// Create a transport over the given backend
    pub fn with_config(mut backend: B, config: TransportConfig) -> Self {
        let volume = Volume::new(config.volume);
        backend.set_gain(volume.gain());

        Self {
            backend,
            state: TransportState::Idle,
            current_item: None,
            active_source: None,
            elapsed: Duration::ZERO,
            total: Duration::ZERO,
            volume,
            fallback_tone: ToneSpec {
                frequency: config.tone_frequency,
                duration_secs: config.tone_duration_secs,
                ..ToneSpec::default()
            },
            on_time: None,
            on_end: None,
            pending_events: Vec::new(),
        }
    }

    // ===== Loading =====

    /// Load an item, replacing any previous or in-flight source
    ///
    /// An item without a usable source (and `None`) gets the synthesized
    /// fallback tone, so playback never silently fails for missing media.
    /// Elapsed time resets to zero and the transport ends up `Paused`,
    /// ready for [`play`](Transport::play).
    pub async fn load(&mut self, item: Option<&Item>) -> Result<()> {
        self.set_state(TransportState::Loading);

        let source = match item {
            Some(item) if item.has_source() => {
                debug!(id = item.id(), "loading item source");
                MediaSource::Locator(item.source().unwrap_or_default().to_string())
            }
            _ => {
                debug!(
                    id = item.map(Item::id),
                    "item has no source, synthesizing fallback tone"
                );
                self.fallback_tone.to_media_source()
            }
        };

        if let Err(err) = self.backend.set_source(&source).await {
            self.set_state(TransportState::Idle);
            return Err(err.into());
        }

        self.current_item = item.cloned();
        self.active_source = Some(source);
        self.elapsed = Duration::ZERO;
        self.total = self.backend.duration().unwrap_or(Duration::ZERO);
        self.set_state(TransportState::Paused);
        self.pending_events.push(TransportEvent::ItemLoaded {
            item_id: item.map(|i| i.id().to_string()),
        });

        Ok(())
    }

    // ===== Playback Control =====

    /// Request playback start
    ///
    /// Backend refusal (e.g. an autoplay policy) surfaces as
    /// [`PlaybackError::PlaybackRejected`]; it is reported, never retried.
    pub async fn play(&mut self) -> Result<()> {
        if let Err(err) = self.backend.play().await {
            warn!(error = %err, "backend rejected play request");
            return Err(PlaybackError::PlaybackRejected(err.to_string()));
        }

        self.set_state(TransportState::Playing);
        Ok(())
    }

    /// Request playback stop; idempotent
    pub fn pause(&mut self) {
        self.backend.pause();
        if self.state == TransportState::Playing {
            self.set_state(TransportState::Paused);
        }
    }

    /// Pause if playing, play otherwise
    pub async fn toggle(&mut self) -> Result<()> {
        if self.state == TransportState::Playing {
            self.pause();
            Ok(())
        } else {
            self.play().await
        }
    }

    // ===== Seek =====

    /// Seek to a fraction of the total duration
    ///
    /// Input is clamped into `[0, 1]`. No-op while the duration is unknown
    /// or zero, which prevents seeking before metadata has loaded.
    pub fn seek_percent(&mut self, percent: f64) {
        let percent = percent.clamp(0.0, 1.0);

        match self.backend.duration() {
            Some(total) if total > Duration::ZERO => {
                let position = total.mul_f64(percent);
                self.backend.seek(position);
                self.elapsed = position;
                self.total = total;
            }
            _ => {}
        }
    }

    // ===== Backend notifications =====

    /// Forward a time-update notification from the backend
    ///
    /// Refreshes the mirrored position and invokes the registered time
    /// handler with elapsed/total/percent.
    pub fn handle_time_update(&mut self) {
        self.elapsed = self.backend.position();
        self.total = self.backend.duration().unwrap_or(Duration::ZERO);

        let position = self.position();
        let update = TimeUpdate {
            elapsed_seconds: position.elapsed_seconds,
            total_seconds: position.total_seconds,
            percent: position.percent(),
        };

        if let Some(handler) = self.on_time.as_mut() {
            handler(update);
        }
    }

    /// Forward an end-of-media notification from the backend
    ///
    /// Rewinds to position zero, lands in `Paused`, and invokes the
    /// registered completion handler exactly once per natural completion.
    pub fn handle_media_ended(&mut self) {
        debug!(
            id = self.current_item.as_ref().map(Item::id),
            "playback reached end of media"
        );

        self.backend.seek(Duration::ZERO);
        self.elapsed = Duration::ZERO;
        self.set_state(TransportState::Paused);
        self.pending_events.push(TransportEvent::PlaybackFinished {
            item_id: self.current_item.as_ref().map(|i| i.id().to_string()),
        });

        if let Some(handler) = self.on_end.as_mut() {
            handler();
        }
    }

    // ===== Handler registration =====

    /// Register the time-update handler (replaces any previous one)
    pub fn on_time(&mut self, handler: impl FnMut(TimeUpdate) + Send + 'static) {
        self.on_time = Some(Box::new(handler));
    }

    /// Register the completion handler (replaces any previous one)
    pub fn on_end(&mut self, handler: impl FnMut() + Send + 'static) {
        self.on_end = Some(Box::new(handler));
    }

    // ===== Volume =====

    /// Set volume (0-100) and push the derived gain to the backend
    pub fn set_volume(&mut self, level: u8) {
        self.volume.set_level(level);
        self.backend.set_gain(self.volume.gain());
    }

    /// Current volume level (0-100)
    pub fn volume(&self) -> u8 {
        self.volume.level()
    }

    /// Mute audio
    pub fn mute(&mut self) {
        self.volume.mute();
        self.backend.set_gain(self.volume.gain());
    }

    /// Unmute audio
    pub fn unmute(&mut self) {
        self.volume.unmute();
        self.backend.set_gain(self.volume.gain());
    }

    /// Toggle mute state
    pub fn toggle_mute(&mut self) {
        self.volume.toggle_mute();
        self.backend.set_gain(self.volume.gain());
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    // ===== Accessors =====

    /// Current transport state
    pub fn state(&self) -> TransportState {
        self.state
    }

    /// Whether playback is currently paused
    pub fn is_paused(&self) -> bool {
        self.state.is_paused()
    }

    /// The loaded item, if any
    pub fn current_item(&self) -> Option<&Item> {
        self.current_item.as_ref()
    }

    /// The source currently assigned to the backend, if any
    pub fn active_source(&self) -> Option<&MediaSource> {
        self.active_source.as_ref()
    }

    /// Snapshot of the mirrored playback position
    pub fn position(&self) -> PlaybackPosition {
        PlaybackPosition {
            elapsed_seconds: self.elapsed.as_secs_f64(),
            total_seconds: self.total.as_secs_f64(),
        }
    }

    /// Drain queued transport events for UI synchronization
    pub fn drain_events(&mut self) -> Vec<TransportEvent> {
        std::mem::take(&mut self.pending_events)
    }

    fn set_state(&mut self, state: TransportState) {
        if self.state != state {
            self.state = state;
            self.pending_events
                .push(TransportEvent::StateChanged { state });
        }
    }
}
