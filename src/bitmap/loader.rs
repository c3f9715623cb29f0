//! PNG decoding into an [`ImageBuffer`].

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::ImageFormat;

use super::buffer::{ImageBuffer, Pixel};
use crate::error::{ConvertError, Result};

/// Narrow a 16-bit channel to 8 bits by integer division.
#[inline]
fn narrow_channel(value: u16) -> u8 {
    (value / 256) as u8
}

/// Load a PNG file into an [`ImageBuffer`].
///
/// Channels are widened to 16 bits, premultiplied by alpha and then narrowed
/// by dividing by 256, so 8-bit and 16-bit PNGs land on the same scale.
/// Fully opaque pixels come through unchanged.
///
/// The file handle is dropped before returning on every path.
pub fn load(path: &Path) -> Result<ImageBuffer> {
    let file = File::open(path).map_err(|e| ConvertError::InputOpen {
        path: path.to_path_buf(),
        source: e,
    })?;

    let decoded = image::load(BufReader::new(file), ImageFormat::Png).map_err(|e| {
        ConvertError::Decode {
            path: path.to_path_buf(),
            source: e,
        }
    })?;

    let wide = decoded.to_rgba16();
    let (width, height) = wide.dimensions();
    log::debug!(
        "Decoded {} as {}x{} ({:?})",
        path.display(),
        width,
        height,
        decoded.color()
    );

    let data = wide
        .pixels()
        .map(|p| {
            let [r, g, b, a] = p.0;
            Pixel::new(
                narrow_channel(premultiply(r, a)),
                narrow_channel(premultiply(g, a)),
                narrow_channel(premultiply(b, a)),
                narrow_channel(a),
            )
        })
        .collect();

    ImageBuffer::from_pixels(width, height, data)
}

#[inline]
fn premultiply(channel: u16, alpha: u16) -> u16 {
    (u32::from(channel) * u32::from(alpha) / 0xffff) as u16
}
