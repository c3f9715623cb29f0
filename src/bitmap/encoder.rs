//! PNG encoding of an [`ImageBuffer`].

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use super::buffer::{ImageBuffer, Pixel};
use crate::error::{ConvertError, Result};

/// Undo the alpha premultiplication applied by the loader.
#[inline]
fn unpremultiply(p: Pixel) -> Pixel {
    match p.a {
        255 => p,
        0 => Pixel::new(0, 0, 0, 0),
        a => {
            let channel = |c: u8| ((u32::from(c) * 0xffff / u32::from(a)) >> 8).min(255) as u8;
            Pixel::new(channel(p.r), channel(p.g), channel(p.b), a)
        }
    }
}

/// Copy the buffer into an `image` crate RGBA image via [`ImageBuffer::pixel`].
fn to_rgba_image(buffer: &ImageBuffer) -> RgbaImage {
    RgbaImage::from_fn(buffer.width(), buffer.height(), |x, y| {
        unpremultiply(buffer.pixel(x, y).unwrap_or_default()).into()
    })
}

/// Write `buffer` to `path` as a PNG file.
///
/// If encoding or writing fails after the file was created, the partial file
/// is removed so a failed run leaves no output behind.
pub fn save_png(buffer: &ImageBuffer, path: &Path) -> Result<()> {
    let rgba = to_rgba_image(buffer);

    let file = File::create(path).map_err(|e| ConvertError::OutputCreate {
        path: path.to_path_buf(),
        source: e,
    })?;

    let result = write_png(&rgba, file, path);
    if result.is_err() {
        if let Err(e) = std::fs::remove_file(path) {
            log::warn!("Failed to remove partial output {}: {}", path.display(), e);
        }
    }
    result
}

fn write_png(rgba: &RgbaImage, file: File, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(file);
    rgba.write_to(&mut writer, ImageFormat::Png)
        .map_err(|e| ConvertError::Encode {
            path: path.to_path_buf(),
            source: e,
        })?;
    writer.flush().map_err(|e| ConvertError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    log::debug!(
        "Encoded {}x{} PNG to {}",
        rgba.width(),
        rgba.height(),
        path.display()
    );
    Ok(())
}
