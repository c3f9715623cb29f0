//! The conversion pipeline: load, resize, then render text or encode PNG.
//!
//! Runs strictly in sequence on the calling thread. Nothing is written unless
//! every earlier stage succeeded.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::ascii::{self, RenderMode};
use crate::bitmap::{self, ImageBuffer};
use crate::error::{ConvertError, Result};
use crate::pipeline_config::{ConvertOptions, OutputFormat};

/// Run a full conversion and return the path written.
pub fn convert(options: &ConvertOptions) -> Result<PathBuf> {
    // Reject bad scales before opening anything
    bitmap::check_scale('x', options.x_scale)?;
    bitmap::check_scale('y', options.y_scale)?;

    log::info!(
        "Converting {} -> {} ({:?})",
        options.input.display(),
        options.output.display(),
        options.format
    );

    let image = bitmap::load(&options.input)?;
    log::info!("Loaded {}x{} image", image.width(), image.height());

    let image = resample(image, options.x_scale, options.y_scale)?;

    match options.format.render_mode() {
        Some(mode) => save_text(&image, mode, &options.output)?,
        None => {
            debug_assert_eq!(options.format, OutputFormat::Png);
            bitmap::save_png(&image, &options.output)?;
        }
    }

    Ok(options.output.clone())
}

/// Replace `image` with its resized version. Unit scales hand it back as is.
fn resample(image: ImageBuffer, x_scale: f64, y_scale: f64) -> Result<ImageBuffer> {
    if x_scale == 1.0 && y_scale == 1.0 {
        return Ok(image);
    }
    let resized = bitmap::resize(&image, x_scale, y_scale)?;
    log::info!("Resized to {}x{}", resized.width(), resized.height());
    Ok(resized)
}

/// Render `image` as text and write it to `path`.
///
/// The whole text is built before the file is created.
pub fn save_text(image: &ImageBuffer, mode: RenderMode, path: &Path) -> Result<()> {
    let text = ascii::render(image, mode);

    let mut file = File::create(path).map_err(|e| ConvertError::OutputCreate {
        path: path.to_path_buf(),
        source: e,
    })?;

    if let Err(e) = file.write_all(text.as_bytes()).and_then(|()| file.sync_all()) {
        drop(file);
        if let Err(rm) = std::fs::remove_file(path) {
            log::warn!("Failed to remove partial output {}: {}", path.display(), rm);
        }
        return Err(ConvertError::Write {
            path: path.to_path_buf(),
            source: e,
        });
    }

    log::debug!(
        "Wrote {} bytes of {} text to {}",
        text.len(),
        mode.name(),
        path.display()
    );
    Ok(())
}
