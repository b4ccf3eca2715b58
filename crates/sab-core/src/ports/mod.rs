//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases in `sab-app` and the
//! platform / infrastructure implementations. Use cases only ever hold
//! `Arc<dyn Port>` so that tests can swap in fakes.

pub mod app_dirs;
mod clock;
pub mod errors;
mod frontmost_app;
mod image_encoder;
mod pasteboard;
pub mod settings;
pub mod watcher_control;

pub use app_dirs::AppDirsPort;
pub use clock::ClockPort;
pub use errors::AppDirsError;
pub use frontmost_app::FrontmostAppPort;
pub use image_encoder::ImageEncoderPort;
pub use pasteboard::PasteboardPort;
pub use settings::SettingsPort;
pub use watcher_control::{WatcherControlError, WatcherControlPort};
