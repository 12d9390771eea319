//! Verse Player Core
//!
//! Platform-agnostic core types, traits, and error handling for Verse Player.
//!
//! This crate provides the foundational building blocks shared by the playback
//! engine and by platform adapters:
//! - **Domain Types**: [`Item`], [`MediaSource`]
//! - **Core Traits**: [`AudioBackend`] (the platform audio primitive)
//! - **Error Handling**: Unified [`CoreError`] and [`Result`] types
//!
//! # Example
//!
//! ```rust
//! use verse_core::types::{Item, MediaSource};
//!
//! let item = Item::new("t1", "First Light")
//!     .with_artist("The Harbor Lights")
//!     .with_source("media/first-light.mp3");
//!
//! assert_eq!(item.display_artist(), "The Harbor Lights");
//! assert_eq!(item.source(), Some("media/first-light.mp3"));
//!
//! let source = MediaSource::Locator("media/first-light.mp3".to_string());
//! assert!(source.as_locator().is_some());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use traits::AudioBackend;
pub use types::{Item, MediaSource};
