use serde::{Deserialize, Serialize};

/// One clipboard payload.
///
/// Image bytes are always PNG encoded, whatever representation the system
/// clipboard offered. Equality is per variant: text by string equality,
/// image by byte equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ClipboardContent {
    Text(String),
    Image(Vec<u8>),
}

impl ClipboardContent {
    /// Title shown in history lists.
    pub fn display_title(&self) -> &str {
        match self {
            ClipboardContent::Text(text) => text,
            ClipboardContent::Image(_) => "Image",
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ClipboardContent::Text(text) => Some(text),
            ClipboardContent::Image(_) => None,
        }
    }

    pub fn image_bytes(&self) -> Option<&[u8]> {
        match self {
            ClipboardContent::Image(bytes) => Some(bytes),
            ClipboardContent::Text(_) => None,
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, ClipboardContent::Image(_))
    }

    pub fn size_bytes(&self) -> usize {
        match self {
            ClipboardContent::Text(text) => text.len(),
            ClipboardContent::Image(bytes) => bytes.len(),
        }
    }
}
