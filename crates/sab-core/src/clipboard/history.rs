use super::{ClipboardContent, ClipboardEntry};
use crate::ids::EntryId;

/// Floor applied to every configured history limit.
pub const MIN_HISTORY_LIMIT: usize = 3;

/// Effective history length for a configured limit.
///
/// Only the floor is enforced here. The upper bound belongs to the settings
/// store.
pub fn effective_history_limit(limit: u32) -> usize {
    (limit as usize).max(MIN_HISTORY_LIMIT)
}

/// Most-recent-first clipboard history.
///
/// Order is insertion order. Nothing re-sorts it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardHistory {
    entries: Vec<ClipboardEntry>,
}

impl ClipboardHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[ClipboardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn head(&self) -> Option<&ClipboardEntry> {
        self.entries.first()
    }

    /// True when `content` equals the content of the current head.
    pub fn head_matches(&self, content: &ClipboardContent) -> bool {
        self.head().is_some_and(|head| &head.content == content)
    }

    pub fn get(&self, id: &EntryId) -> Option<&ClipboardEntry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    /// Insert at the head.
    ///
    /// Returns `false` and leaves the history untouched when the entry's
    /// content repeats the current head.
    pub fn push_front(&mut self, entry: ClipboardEntry) -> bool {
        if self.head_matches(&entry.content) {
            return false;
        }
        self.entries.insert(0, entry);
        true
    }

    /// Drop tail entries beyond `max(3, limit)`. Returns how many were dropped.
    pub fn trim_to(&mut self, limit: u32) -> usize {
        let keep = effective_history_limit(limit);
        if self.entries.len() <= keep {
            return 0;
        }
        let dropped = self.entries.len() - keep;
        self.entries.truncate(keep);
        dropped
    }

    pub fn remove(&mut self, id: &EntryId) -> Option<ClipboardEntry> {
        let index = self.entries.iter().position(|entry| &entry.id == id)?;
        Some(self.entries.remove(index))
    }

    /// Empty the history. Returns `true` if anything was removed.
    pub fn clear(&mut self) -> bool {
        let had_entries = !self.entries.is_empty();
        self.entries.clear();
        had_entries
    }
}

/// First `max(3, limit)` entries, as shown by the menu bar quick-copy list.
pub fn quick_copy_slice(entries: &[ClipboardEntry], limit: u32) -> &[ClipboardEntry] {
    let end = effective_history_limit(limit).min(entries.len());
    &entries[..end]
}
