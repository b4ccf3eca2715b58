//! Serialized execution context for the clipboard tracker.
//!
//! ```text
//! TrackerHandle ──TrackerCommand──┐
//! poll ticker (600 ms) ───────────┼──> TrackerRuntime::run ──> ClipboardHistoryTracker
//! SettingsStore ──watch───────────┘
//! ```
//!
//! Everything that touches the history runs on the one task spawned for
//! [`TrackerRuntime::run`], so no two mutations interleave.

mod command;
mod handle;
mod tracker_runtime;

pub use command::TrackerCommand;
pub use handle::{TrackerError, TrackerHandle};
pub use tracker_runtime::{TrackerRuntime, DEFAULT_POLL_INTERVAL};
