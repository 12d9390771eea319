//! Domain types shared across Verse Player crates

mod item;
mod source;

pub use item::{Item, UNKNOWN_ARTIST};
pub use source::MediaSource;
