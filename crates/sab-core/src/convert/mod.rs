//! Image converter model: formats, suggestions and output naming.

use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageConversionError {
    #[error("unsupported image format: {0}")]
    Unsupported(String),

    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("failed to encode image as {format}: {reason}")]
    Encode { format: ImageFormat, reason: String },

    #[error("failed to read {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write converted image to {path}: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Heic,
    Webp,
}

impl ImageFormat {
    /// Formats offered as conversion targets.
    pub const OUTPUTS: [ImageFormat; 3] = [ImageFormat::Jpeg, ImageFormat::Png, ImageFormat::Heic];

    /// Detect a format from a file extension, case-insensitively.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "heic" | "heif" => Some(ImageFormat::Heic),
            "webp" => Some(ImageFormat::Webp),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Parse a user supplied output type (`JPG`, `JPEG`, `PNG`, `HEIC`).
    pub fn parse_output(value: &str) -> Result<Self, ImageConversionError> {
        match value.to_ascii_uppercase().as_str() {
            "JPG" | "JPEG" => Ok(ImageFormat::Jpeg),
            "PNG" => Ok(ImageFormat::Png),
            "HEIC" => Ok(ImageFormat::Heic),
            _ => Err(ImageConversionError::Unsupported(value.to_string())),
        }
    }

    /// Target picked when the user keeps the suggested output.
    pub fn suggested_output(input: Option<ImageFormat>) -> ImageFormat {
        match input {
            Some(ImageFormat::Jpeg) | Some(ImageFormat::Webp) => ImageFormat::Png,
            _ => ImageFormat::Jpeg,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Heic => "heic",
            ImageFormat::Webp => "webp",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ImageFormat::Png => "PNG",
            ImageFormat::Jpeg => "JPG",
            ImageFormat::Heic => "HEIC",
            ImageFormat::Webp => "WEBP",
        }
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// `<stem>-converted.<ext>` for the given input path.
pub fn converted_file_name(input: &Path, format: ImageFormat) -> String {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    format!("{stem}-converted.{}", format.extension())
}
