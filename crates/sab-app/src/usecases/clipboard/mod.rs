mod tracker;

pub use tracker::{CaptureOutcome, ClipboardHistoryTracker};
