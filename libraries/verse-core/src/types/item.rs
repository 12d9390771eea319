/// Playable item domain type
use serde::{Deserialize, Serialize};

/// Placeholder shown when an item carries no artist
pub const UNKNOWN_ARTIST: &str = "Unknown artist";

/// A playable item in the catalog
///
/// Immutable once constructed. The `source` locator may be absent or empty;
/// in that case the transport falls back to a synthesized tone instead of
/// failing silently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique item identifier
    id: String,

    /// Display title
    title: String,

    /// Artist name (display falls back to [`UNKNOWN_ARTIST`])
    artist: Option<String>,

    /// Locator for playable audio (path, URL); may be absent
    source: Option<String>,

    /// Display accent color hint, opaque to the core
    accent_color: Option<String>,
}

impl Item {
    /// Create a new item with the minimal required fields
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: None,
            source: None,
            accent_color: None,
        }
    }

    /// Set the artist name
    #[must_use]
    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    /// Set the audio source locator
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Set the display accent color hint
    #[must_use]
    pub fn with_accent_color(mut self, color: impl Into<String>) -> Self {
        self.accent_color = Some(color.into());
        self
    }

    /// Unique item identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Artist name as stored, if any
    pub fn artist(&self) -> Option<&str> {
        self.artist.as_deref()
    }

    /// Artist name for display, falling back to [`UNKNOWN_ARTIST`]
    pub fn display_artist(&self) -> &str {
        self.artist.as_deref().unwrap_or(UNKNOWN_ARTIST)
    }

    /// Audio source locator, normalized: empty strings count as absent
    pub fn source(&self) -> Option<&str> {
        match self.source.as_deref() {
            Some("") | None => None,
            some => some,
        }
    }

    /// Whether the item carries a usable audio source
    pub fn has_source(&self) -> bool {
        self.source().is_some()
    }

    /// Display accent color hint, if any
    pub fn accent_color(&self) -> Option<&str> {
        self.accent_color.as_deref()
    }
}
