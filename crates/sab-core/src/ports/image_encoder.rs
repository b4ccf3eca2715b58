use crate::convert::{ImageConversionError, ImageFormat};

/// Decodes an image and re-encodes it into `format`.
pub trait ImageEncoderPort: Send + Sync {
    fn encode(&self, input: &[u8], format: ImageFormat) -> Result<Vec<u8>, ImageConversionError>;
}
