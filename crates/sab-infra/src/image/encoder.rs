use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::webp::WebPEncoder;
use image::DynamicImage;
use tracing::{debug, debug_span};

use sab_core::ports::ImageEncoderPort;
use sab_core::{ImageConversionError, ImageFormat};

pub const JPEG_QUALITY: u8 = 90;

/// Re-encodes images with the `image` crate. HEIC has no encoder there
/// and is reported as unsupported.
#[derive(Debug, Default)]
pub struct ImageCrateEncoder;

impl ImageCrateEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl ImageEncoderPort for ImageCrateEncoder {
    fn encode(&self, input: &[u8], format: ImageFormat) -> Result<Vec<u8>, ImageConversionError> {
        let span = debug_span!("infra.image.encode", %format, input_bytes = input.len());
        let _enter = span.enter();

        if format == ImageFormat::Heic {
            return Err(ImageConversionError::Unsupported(format.label().to_string()));
        }

        let decoded = image::load_from_memory(input)
            .map_err(|e| ImageConversionError::Decode(e.to_string()))?;

        let mut output = Vec::new();
        let result = match format {
            ImageFormat::Jpeg => {
                // JPEG carries no alpha channel.
                let rgb = DynamicImage::ImageRgb8(decoded.to_rgb8());
                rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut output, JPEG_QUALITY))
            }
            ImageFormat::Png => decoded.write_with_encoder(PngEncoder::new(&mut output)),
            ImageFormat::Webp => {
                let rgba = DynamicImage::ImageRgba8(decoded.to_rgba8());
                rgba.write_with_encoder(WebPEncoder::new_lossless(&mut output))
            }
            ImageFormat::Heic => {
                return Err(ImageConversionError::Unsupported(format.label().to_string()))
            }
        };
        result.map_err(|e| ImageConversionError::Encode {
            format,
            reason: e.to_string(),
        })?;

        debug!(output_bytes = output.len(), "Image encoded");
        Ok(output)
    }
}
