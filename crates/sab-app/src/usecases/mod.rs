//! Business logic use cases
//!
//! [PasteboardPort] ──poll──> ClipboardHistoryTracker ──watch──> UI / menu bar
//!                                    ↑
//!                     SettingsStore ─┘ (limit + exclusion set)

pub mod clipboard;
pub mod convert_image;
pub mod focus_timer;
pub mod settings;
pub mod watcher_lifecycle;

pub use convert_image::ConvertImage;
pub use focus_timer::{FocusTimerSession, SessionEnd};
pub use watcher_lifecycle::{ClipboardWatcherLifecycle, WatcherLifecycleError};
