//! Scroll restoration policy and per-history-entry scroll memory.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use std::num::NonZeroUsize;

use lru::LruCache;

use super::navigation::NavigationKind;

/// Entries kept before the least recently touched offset is dropped.
pub const MAX_REMEMBERED: usize = 64;

const CAPACITY: NonZeroUsize = match NonZeroUsize::new(MAX_REMEMBERED) {
    Some(capacity) => capacity,
    None => NonZeroUsize::MIN,
};

/// Identity of one history entry. The browser keeps it in `history.state`,
/// so two entries with the same URL stay distinct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub u64);

impl EntryId {
    /// Read an id back from a `history.state` number.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_state(value: f64) -> Option<Self> {
        (value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= MAX_SAFE_STATE)
            .then(|| Self(value as u64))
    }

    /// Number written to `history.state`.
    #[allow(clippy::cast_precision_loss)]
    pub fn to_state(self) -> f64 {
        self.0 as f64
    }
}

/// Largest integer a JS number holds exactly.
const MAX_SAFE_STATE: f64 = 9_007_199_254_740_991.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollOffset {
    pub x: f64,
    pub y: f64,
}

impl ScrollOffset {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Where the document should end up once the new view has mounted.
#[derive(Clone, Debug, PartialEq)]
pub enum ScrollTarget {
    /// Jump back to an exact remembered offset.
    Restore(ScrollOffset),
    /// Smooth-scroll the element with this id into view.
    Anchor(String),
    /// Smooth-scroll to the top of the document.
    Top,
}

/// Pick the scroll target: remembered offset on history traversal, then the
/// fragment anchor, then the top of the page.
pub fn scroll_policy(kind: NavigationKind, remembered: Option<ScrollOffset>, fragment: Option<&str>) -> ScrollTarget {
    if kind == NavigationKind::Traverse {
        if let Some(offset) = remembered {
            return ScrollTarget::Restore(offset);
        }
    }
    match fragment {
        Some(id) if !id.is_empty() => ScrollTarget::Anchor(id.to_owned()),
        _ => ScrollTarget::Top,
    }
}

/// Last known offset per history entry, bounded to [`MAX_REMEMBERED`]
/// least-recently-touched entries.
#[derive(Debug)]
pub struct ScrollMemory {
    offsets: LruCache<EntryId, ScrollOffset>,
}

impl Default for ScrollMemory {
    fn default() -> Self {
        Self { offsets: LruCache::new(CAPACITY) }
    }
}

impl ScrollMemory {
    pub fn remember(&mut self, entry: EntryId, offset: ScrollOffset) {
        self.offsets.put(entry, offset);
    }

    pub fn recall(&self, entry: EntryId) -> Option<ScrollOffset> {
        self.offsets.peek(&entry).copied()
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}
