/// Media source handed to the audio backend
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

/// What the transport assigns to the audio backend
///
/// Either a locator taken verbatim from an [`Item`](crate::types::Item), or an
/// in-memory buffer (the synthesized fallback tone). Buffers can be exposed as
/// a `data:` URI wherever the backend only accepts locators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaSource {
    /// Locator for playable audio (path, URL), taken verbatim from the item
    Locator(String),

    /// In-memory audio buffer with its MIME type
    Buffer {
        /// MIME type of the buffer, e.g. `audio/wav`
        mime: String,
        /// Raw container bytes
        bytes: Vec<u8>,
    },
}

impl MediaSource {
    /// Create a buffer source from raw container bytes
    pub fn buffer(mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self::Buffer {
            mime: mime.into(),
            bytes,
        }
    }

    /// The locator string, if this is a locator source
    pub fn as_locator(&self) -> Option<&str> {
        match self {
            Self::Locator(locator) => Some(locator),
            Self::Buffer { .. } => None,
        }
    }

    /// The raw bytes, if this is a buffer source
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Locator(_) => None,
            Self::Buffer { bytes, .. } => Some(bytes),
        }
    }

    /// Render the source as something a locator-only backend can load
    ///
    /// Locators pass through unchanged; buffers become a base64 `data:` URI.
    pub fn to_loadable(&self) -> String {
        match self {
            Self::Locator(locator) => locator.clone(),
            Self::Buffer { mime, bytes } => {
                format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
            }
        }
    }
}
