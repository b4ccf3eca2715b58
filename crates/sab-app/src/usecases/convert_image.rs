use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, info_span, Instrument};

use sab_core::convert::converted_file_name;
use sab_core::ports::ImageEncoderPort;
use sab_core::{ImageConversionError, ImageFormat};

/// Convert one image file. The output lands in `output_dir` (system temp
/// dir by default) as `<stem>-converted.<ext>`.
pub struct ConvertImage {
    encoder: Arc<dyn ImageEncoderPort>,
}

impl ConvertImage {
    pub fn new(encoder: Arc<dyn ImageEncoderPort>) -> Self {
        Self { encoder }
    }

    /// Returns the path of the written file.
    ///
    /// `target` falls back to the suggestion for the input's extension.
    pub async fn execute(
        &self,
        input: &Path,
        target: Option<ImageFormat>,
        output_dir: Option<&Path>,
    ) -> Result<PathBuf> {
        let target =
            target.unwrap_or_else(|| ImageFormat::suggested_output(ImageFormat::from_path(input)));
        let span = info_span!("usecase.convert_image.execute", input = %input.display(), %target);

        async move {
            let bytes = tokio::fs::read(input)
                .await
                .map_err(|source| ImageConversionError::ReadFailed {
                    path: input.display().to_string(),
                    source,
                })?;

            let encoder = self.encoder.clone();
            let encoded = tokio::task::spawn_blocking(move || encoder.encode(&bytes, target))
                .await
                .context("image encoder task panicked")??;

            let output_dir = output_dir
                .map(Path::to_path_buf)
                .unwrap_or_else(std::env::temp_dir);
            let output = output_dir.join(converted_file_name(input, target));
            tokio::fs::write(&output, &encoded).await.map_err(|source| {
                ImageConversionError::WriteFailed {
                    path: output.display().to_string(),
                    source,
                }
            })?;

            info!(output = %output.display(), bytes = encoded.len(), "Image converted");
            Ok(output)
        }
        .instrument(span)
        .await
    }
}
