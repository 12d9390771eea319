//! Ordered item catalog with a wrapping cursor
//!
//! Insertion order is playback order. The cursor always stays inside
//! `[0, len)`; navigation wraps at both ends instead of stopping.

use verse_core::types::Item;

/// Ordered sequence of playable items plus a current-position cursor
///
/// Constructed once with a fixed item sequence; only the cursor mutates.
/// Every operation is total: any `i64` is a valid cursor request, and
/// navigation on an empty catalog yields `None` rather than faulting.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Items in playback order
    items: Vec<Item>,

    /// Current position, always in `[0, items.len())` when non-empty
    cursor: usize,
}

impl Catalog {
    /// Create a catalog from a fixed item sequence, cursor at the start
    pub fn new(items: Vec<Item>) -> Self {
        Self { items, cursor: 0 }
    }

    /// Move the cursor, wrapping any integer into valid range
    ///
    /// Uses floor-mod (`((i % n) + n) % n`) so negative requests wrap
    /// backwards correctly; a plain `%` would go negative. No-op when empty.
    pub fn set_cursor(&mut self, index: i64) {
        if self.items.is_empty() {
            return;
        }
        let n = self.items.len() as i64;
        self.cursor = (((index % n) + n) % n) as usize;
    }

    /// Item under the cursor, `None` if the catalog is empty
    pub fn current(&self) -> Option<&Item> {
        self.items.get(self.cursor)
    }

    /// Advance the cursor by one (wrapping) and return the new current item
    pub fn next(&mut self) -> Option<&Item> {
        self.set_cursor(self.cursor as i64 + 1);
        self.current()
    }

    /// Step the cursor back by one (wrapping) and return the new current item
    pub fn previous(&mut self) -> Option<&Item> {
        self.set_cursor(self.cursor as i64 - 1);
        self.current()
    }

    /// Linear lookup by item identity
    pub fn find_by_id(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Current cursor position (0 when empty)
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of items in the catalog
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items in playback order
    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
