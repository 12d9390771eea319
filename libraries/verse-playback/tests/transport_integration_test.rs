//! Integration tests for the transport over a scripted backend
//!
//! Drives the full playback lifecycle the way a presentation layer would:
//! load, play, pause, seek, time updates, natural completion, and the
//! fallback-tone path for items without sources.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use verse_core::{types::Item, types::MediaSource, AudioBackend, CoreError};
use verse_playback::{Catalog, PlaybackError, TimeUpdate, Transport, TransportState};

// =============================================================================
// SCRIPTED BACKEND
// =============================================================================

/// Shared knobs for scripting backend behavior from inside a test
#[derive(Default)]
struct BackendScript {
    reject_play: bool,
    duration: Option<Duration>,
}

/// Audio backend stand-in that records every interaction
struct ScriptedBackend {
    script: Arc<Mutex<BackendScript>>,
    source: Option<MediaSource>,
    position: Duration,
    paused: bool,
    gain: f32,
    set_source_calls: usize,
}

impl ScriptedBackend {
    fn new(script: Arc<Mutex<BackendScript>>) -> Self {
        Self {
            script,
            source: None,
            position: Duration::ZERO,
            paused: true,
            gain: 1.0,
            set_source_calls: 0,
        }
    }
}

#[async_trait::async_trait]
impl AudioBackend for ScriptedBackend {
    async fn set_source(&mut self, source: &MediaSource) -> verse_core::Result<()> {
        self.set_source_calls += 1;
        self.source = Some(source.clone());
        self.position = Duration::ZERO;
        Ok(())
    }

    async fn play(&mut self) -> verse_core::Result<()> {
        if self.script.lock().unwrap().reject_play {
            return Err(CoreError::backend("user gesture required"));
        }
        self.paused = false;
        Ok(())
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn seek(&mut self, position: Duration) {
        self.position = position;
    }

    fn position(&self) -> Duration {
        self.position
    }

    fn duration(&self) -> Option<Duration> {
        self.script.lock().unwrap().duration
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn set_gain(&mut self, gain: f32) {
        self.gain = gain;
    }
}

fn scripted_transport() -> (Transport<ScriptedBackend>, Arc<Mutex<BackendScript>>) {
    let script = Arc::new(Mutex::new(BackendScript::default()));
    let transport = Transport::new(ScriptedBackend::new(Arc::clone(&script)));
    (transport, script)
}

fn demo_catalog() -> Catalog {
    Catalog::new(vec![
        Item::new("a", "First Light")
            .with_artist("The Harbor Lights")
            .with_source("media/first-light.mp3"),
        Item::new("b", "Riverbed").with_source("media/riverbed.mp3"),
        // No source: plays the synthesized tone
        Item::new("c", "Interlude"),
    ])
}

// =============================================================================
// LIFECYCLE
// =============================================================================

#[tokio::test]
async fn full_playback_lifecycle() {
    let (mut transport, script) = scripted_transport();
    script.lock().unwrap().duration = Some(Duration::from_secs(120));

    let catalog = demo_catalog();
    let item = catalog.current().unwrap().clone();

    assert_eq!(transport.state(), TransportState::Idle);
    assert!(transport.is_paused());

    transport.load(Some(&item)).await.unwrap();
    assert_eq!(transport.state(), TransportState::Paused);
    assert_eq!(
        transport.active_source().unwrap().as_locator(),
        Some("media/first-light.mp3")
    );

    transport.play().await.unwrap();
    assert_eq!(transport.state(), TransportState::Playing);
    assert!(!transport.is_paused());

    transport.seek_percent(0.5);
    assert_eq!(transport.position().elapsed_seconds, 60.0);

    transport.pause();
    assert_eq!(transport.state(), TransportState::Paused);
}

#[tokio::test]
async fn transport_is_reusable_after_completion() {
    let (mut transport, script) = scripted_transport();
    script.lock().unwrap().duration = Some(Duration::from_secs(30));

    let mut catalog = demo_catalog();
    transport
        .load(Some(&catalog.current().unwrap().clone()))
        .await
        .unwrap();
    transport.play().await.unwrap();
    transport.handle_media_ended();

    assert_eq!(transport.state(), TransportState::Paused);
    assert_eq!(transport.position().elapsed_seconds, 0.0);

    // Move on to the next catalog item and go again
    let next = catalog.next().unwrap().clone();
    transport.load(Some(&next)).await.unwrap();
    transport.play().await.unwrap();
    assert_eq!(transport.current_item().unwrap().id(), "b");
    assert_eq!(transport.state(), TransportState::Playing);
}

#[tokio::test]
async fn play_immediately_after_load_is_buffered() {
    // A well-behaved backend buffers a play issued right after load resolves
    let (mut transport, _script) = scripted_transport();
    let item = Item::new("x", "Quick Draw").with_source("media/x.mp3");

    transport.load(Some(&item)).await.unwrap();
    transport.play().await.unwrap();
    assert_eq!(transport.state(), TransportState::Playing);
}

#[tokio::test]
async fn reload_replaces_active_source() {
    let (mut transport, _script) = scripted_transport();
    let catalog = demo_catalog();

    transport
        .load(Some(&catalog.find_by_id("a").unwrap().clone()))
        .await
        .unwrap();
    transport
        .load(Some(&catalog.find_by_id("b").unwrap().clone()))
        .await
        .unwrap();

    assert_eq!(
        transport.active_source().unwrap().as_locator(),
        Some("media/riverbed.mp3")
    );
    assert_eq!(transport.current_item().unwrap().id(), "b");
}

// =============================================================================
// FALLBACK TONE
// =============================================================================

#[tokio::test]
async fn sourceless_item_gets_synthesized_tone() {
    let (mut transport, _script) = scripted_transport();
    let catalog = demo_catalog();
    let interlude = catalog.find_by_id("c").unwrap().clone();

    transport.load(Some(&interlude)).await.unwrap();

    let source = transport.active_source().unwrap();
    let bytes = source.as_bytes().expect("tone should be an in-memory buffer");
    assert_eq!(bytes.len(), 2044);
    assert_eq!(&bytes[0..4], b"RIFF");

    // And it is loadable by a locator-only backend
    assert!(source.to_loadable().starts_with("data:audio/wav;base64,"));
}

#[tokio::test]
async fn tone_fallback_is_stable_across_loads() {
    let (mut transport, _script) = scripted_transport();
    let item = Item::new("c", "Interlude");

    transport.load(Some(&item)).await.unwrap();
    let first = transport.active_source().unwrap().clone();

    transport.load(Some(&item)).await.unwrap();
    let second = transport.active_source().unwrap().clone();

    assert_eq!(first, second);
}

// =============================================================================
// NOTIFICATIONS
// =============================================================================

#[tokio::test]
async fn time_updates_report_progress() {
    let (mut transport, script) = scripted_transport();
    script.lock().unwrap().duration = Some(Duration::from_secs(200));

    let item = Item::new("a", "First Light").with_source("media/a.mp3");
    transport.load(Some(&item)).await.unwrap();

    let updates: Arc<Mutex<Vec<TimeUpdate>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&updates);
    transport.on_time(move |update| sink.lock().unwrap().push(update));

    transport.play().await.unwrap();
    transport.seek_percent(0.25);
    transport.handle_time_update();

    let updates = updates.lock().unwrap();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].elapsed_seconds, 50.0);
    assert_eq!(updates[0].total_seconds, 200.0);
    assert_eq!(updates[0].percent, 0.25);
}

#[tokio::test]
async fn time_update_percent_is_zero_without_duration() {
    let (mut transport, _script) = scripted_transport();
    let item = Item::new("a", "First Light").with_source("media/a.mp3");
    transport.load(Some(&item)).await.unwrap();

    let percents: Arc<Mutex<Vec<f64>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&percents);
    transport.on_time(move |update| sink.lock().unwrap().push(update.percent));

    transport.handle_time_update();
    assert_eq!(*percents.lock().unwrap(), vec![0.0]);
}

#[tokio::test]
async fn completion_notifies_each_natural_end_once() {
    let (mut transport, script) = scripted_transport();
    script.lock().unwrap().duration = Some(Duration::from_secs(10));

    let item = Item::new("a", "Looped").with_source("media/a.mp3");
    transport.load(Some(&item)).await.unwrap();

    let ends = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&ends);
    transport.on_end(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    transport.play().await.unwrap();
    transport.handle_media_ended();
    assert_eq!(ends.load(Ordering::SeqCst), 1);

    transport.play().await.unwrap();
    transport.handle_media_ended();
    assert_eq!(ends.load(Ordering::SeqCst), 2);
}

// =============================================================================
// ERRORS
// =============================================================================

#[tokio::test]
async fn autoplay_rejection_reaches_the_caller() {
    let (mut transport, script) = scripted_transport();
    script.lock().unwrap().reject_play = true;

    let item = Item::new("a", "First Light").with_source("media/a.mp3");
    transport.load(Some(&item)).await.unwrap();

    match transport.play().await {
        Err(PlaybackError::PlaybackRejected(msg)) => {
            assert!(msg.contains("user gesture required"));
        }
        other => panic!("expected PlaybackRejected, got {:?}", other),
    }

    // A later allowed play still works; no automatic retry happened
    script.lock().unwrap().reject_play = false;
    transport.play().await.unwrap();
    assert_eq!(transport.state(), TransportState::Playing);
}
