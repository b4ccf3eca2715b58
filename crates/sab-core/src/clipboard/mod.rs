//! Clipboard domain models.
mod content;
mod entry;
mod history;
mod snapshot;

pub use content::ClipboardContent;
pub use entry::{ClipboardEntry, UNKNOWN_SOURCE};
pub use history::{
    effective_history_limit, quick_copy_slice, ClipboardHistory, MIN_HISTORY_LIMIT,
};
pub use snapshot::{ChangeToken, PasteboardContents, SourceApp};
