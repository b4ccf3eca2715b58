//! SwissArmyBar application orchestration layer
//!
//! Use cases plus the runtime task that owns the clipboard history.

pub mod app_paths;
pub mod runtime;
pub mod usecases;

#[cfg(test)]
pub(crate) mod test_support;

pub use runtime::{TrackerError, TrackerHandle, TrackerRuntime, DEFAULT_POLL_INTERVAL};
pub use usecases::clipboard::{CaptureOutcome, ClipboardHistoryTracker};
pub use usecases::settings::SettingsStore;
pub use usecases::{
    ClipboardWatcherLifecycle, ConvertImage, FocusTimerSession, SessionEnd, WatcherLifecycleError,
};
