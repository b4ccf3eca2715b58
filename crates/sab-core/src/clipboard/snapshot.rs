use serde::{Deserialize, Serialize};

use super::ClipboardContent;

/// Opaque pasteboard change counter.
///
/// Only equality matters: a token different from the last observed one means
/// the pasteboard changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChangeToken(pub u64);

impl std::fmt::Display for ChangeToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a single pasteboard read yields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasteboardContents {
    /// PNG-normalized image, if any image representation was present.
    pub image_png: Option<Vec<u8>>,
    pub text: Option<String>,
}

impl PasteboardContents {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            image_png: None,
            text: Some(text.into()),
        }
    }

    pub fn image(png: Vec<u8>) -> Self {
        Self {
            image_png: Some(png),
            text: None,
        }
    }

    /// Classify into a capturable payload.
    ///
    /// Images win over text. Empty text counts as nothing.
    pub fn into_content(self) -> Option<ClipboardContent> {
        if let Some(png) = self.image_png.filter(|bytes| !bytes.is_empty()) {
            return Some(ClipboardContent::Image(png));
        }
        self.text
            .filter(|text| !text.is_empty())
            .map(ClipboardContent::Text)
    }
}

/// The application that owned input focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceApp {
    /// Bundle identifier (or platform equivalent), matched against the
    /// exclusion set.
    pub id: Option<String>,
    pub name: Option<String>,
}
