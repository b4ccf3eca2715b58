//! # sab-platform
//!
//! Platform-specific adapters for SwissArmyBar.
//!
//! Implements the `sab-core` ports that talk to the operating system:
//! the general pasteboard, the frontmost application and the per-user
//! data directory.

pub mod app_dirs;
pub mod frontmost;
pub mod pasteboard;

pub use app_dirs::DirsAppDirsAdapter;
pub use frontmost::LocalFrontmostApp;
pub use pasteboard::LocalPasteboard;
