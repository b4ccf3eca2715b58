mod encoder;

pub use encoder::{ImageCrateEncoder, JPEG_QUALITY};
