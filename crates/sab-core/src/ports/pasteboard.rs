//! Pasteboard port - abstracts the shared system clipboard
//!
//! The pasteboard is an external mutable resource. This component never owns
//! it; the change token is the only consistency mechanism.

use anyhow::Result;

use crate::clipboard::{ChangeToken, ClipboardContent, PasteboardContents};

pub trait PasteboardPort: Send + Sync {
    /// Current change counter. Cheap; called every poll tick.
    fn change_token(&self) -> Result<ChangeToken>;

    /// Read the current payload, image representations first.
    fn read(&self) -> Result<PasteboardContents>;

    /// Replace the pasteboard content.
    ///
    /// Prior content is cleared first. Images are decoded from PNG into the
    /// native image object before writing.
    fn write(&self, content: &ClipboardContent) -> Result<()>;
}
