//! # sab-core
//!
//! Core domain models and ports for SwissArmyBar.
//!
//! This crate contains pure logic without any infrastructure dependencies:
//! clipboard history, settings, the focus timer state machine and the
//! image format model. Everything that touches the OS or the file system is
//! reached through the traits in [`ports`].

pub mod app_dirs;
pub mod clipboard;
pub mod config;
pub mod convert;
pub mod ids;
pub mod ports;
pub mod settings;
pub mod timer;

// Re-export commonly used types at the crate root
pub use clipboard::{
    effective_history_limit, quick_copy_slice, ChangeToken, ClipboardContent, ClipboardEntry,
    ClipboardHistory, PasteboardContents, SourceApp, UNKNOWN_SOURCE,
};
pub use config::AppConfig;
pub use convert::{ImageConversionError, ImageFormat};
pub use ids::EntryId;
pub use settings::{ClipboardSettings, MenuBarSettings, Settings, TimerSettings};
pub use timer::{FocusTimer, TickOutcome};
