use serde::{Deserialize, Serialize};

use super::ClipboardContent;
use crate::ids::EntryId;

/// Source label used when the frontmost application cannot be resolved.
pub const UNKNOWN_SOURCE: &str = "Unknown";

/// One captured clipboard snapshot with its provenance.
///
/// Entries are immutable once created; the history only inserts and drops
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardEntry {
    pub id: EntryId,
    pub content: ClipboardContent,
    /// Display name of the application that owned focus at capture time.
    pub source: String,
    /// Wall clock capture time, display only.
    pub captured_at_ms: i64,
}

impl ClipboardEntry {
    pub fn new(content: ClipboardContent, source: Option<String>, captured_at_ms: i64) -> Self {
        Self {
            id: EntryId::new(),
            content,
            source: source.unwrap_or_else(|| UNKNOWN_SOURCE.to_string()),
            captured_at_ms,
        }
    }

    pub fn display_title(&self) -> &str {
        self.content.display_title()
    }
}
