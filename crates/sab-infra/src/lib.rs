//! # sab-infra
//!
//! Infrastructure adapters for SwissArmyBar: the JSON settings file, the
//! system clock and the `image`-crate encoder.

pub mod image;
pub mod settings;
pub mod time;

pub use image::ImageCrateEncoder;
pub use settings::FileSettingsRepository;
pub use time::SystemClock;
