use anyhow::{anyhow, Result};
use clipboard_rs::common::RustImage;
use clipboard_rs::{Clipboard, ClipboardContext, ContentFormat, RustImageData};
use tracing::trace;

use sab_core::{ClipboardContent, PasteboardContents};

/// Native PNG pasteboard type.
#[cfg(target_os = "macos")]
const PNG_FORMAT_ID: &str = "public.png";
#[cfg(target_os = "windows")]
const PNG_FORMAT_ID: &str = "PNG";
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const PNG_FORMAT_ID: &str = "image/png";

fn map_clipboard_err<T>(
    result: std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>,
) -> Result<T> {
    result.map_err(|e| anyhow!(e))
}

pub(crate) fn read_contents(ctx: &mut ClipboardContext) -> Result<PasteboardContents> {
    let available = map_clipboard_err(ctx.available_formats())?;

    let image_png = read_png(ctx, &available);
    let text = if ctx.has(ContentFormat::Text) {
        ctx.get_text().ok()
    } else {
        None
    };

    trace!(
        formats = available.len(),
        has_image = image_png.is_some(),
        has_text = text.is_some(),
        "Read pasteboard contents"
    );
    Ok(PasteboardContents { image_png, text })
}

/// Prefer the raw PNG representation, then fall back to any image the
/// platform can render as PNG.
fn read_png(ctx: &mut ClipboardContext, available: &[String]) -> Option<Vec<u8>> {
    if available.iter().any(|format| format == PNG_FORMAT_ID) {
        if let Ok(bytes) = ctx.get_buffer(PNG_FORMAT_ID) {
            if !bytes.is_empty() {
                return Some(bytes);
            }
        }
    }

    if !ctx.has(ContentFormat::Image) {
        return None;
    }
    let image = ctx.get_image().ok()?;
    let png = image.to_png().ok()?;
    Some(png.get_bytes().to_vec())
}

pub(crate) fn write_content(ctx: &mut ClipboardContext, content: &ClipboardContent) -> Result<()> {
    match content {
        ClipboardContent::Text(text) => map_clipboard_err(ctx.set_text(text.clone())),
        ClipboardContent::Image(png) => {
            let image = RustImageData::from_bytes(png).map_err(|e| anyhow!(e))?;
            map_clipboard_err(ctx.set_image(image))
        }
    }
}
