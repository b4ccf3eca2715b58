use crate::clipboard::SourceApp;

/// Resolves the application that currently owns input focus.
pub trait FrontmostAppPort: Send + Sync {
    /// `None` when no application can be resolved.
    fn frontmost_app(&self) -> Option<SourceApp>;
}
