//! Nearest-neighbor resampling.

use super::buffer::ImageBuffer;
use crate::error::{ConvertError, Result};

/// Largest output resize will allocate, in pixels (1 GiB of RGBA).
pub const MAX_PIXELS: u64 = 1 << 28;

/// Output size along one axis: `floor(old * scale)`.
#[inline]
pub fn scaled_dimension(old: u32, scale: f64) -> u32 {
    // `as` saturates, so huge products pin at u32::MAX rather than wrapping
    (f64::from(old) * scale).floor() as u32
}

/// Source coordinate for destination coordinate `dst`, clamped into `[0, old - 1]`.
#[inline]
fn source_coord(dst: u32, scale: f64, old: u32) -> u32 {
    let src = (f64::from(dst) / scale).floor() as u32;
    src.min(old.saturating_sub(1))
}

/// Scales must be finite and strictly positive.
pub(crate) fn check_scale(axis: char, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConvertError::InvalidScale { axis, value })
    }
}

/// Reject output sizes that would not fit in [`MAX_PIXELS`].
///
/// Each axis is checked on its own too, since a zero-height result would
/// still allocate one lookup entry per column.
fn check_size(width: u32, height: u32) -> Result<()> {
    let (w, h) = (u64::from(width), u64::from(height));
    if w > MAX_PIXELS || h > MAX_PIXELS || w * h > MAX_PIXELS {
        return Err(ConvertError::TooLarge { width, height });
    }
    Ok(())
}

/// Resample `buffer` by independent x/y scale factors.
///
/// Each destination pixel `(x, y)` is an exact copy of source pixel
/// `(floor(x / x_scale), floor(y / y_scale))`; nothing is blended. The source
/// buffer is left untouched and a new one is returned.
///
/// Scales must be finite and greater than zero. A scale small enough to floor
/// a dimension to zero yields an empty buffer; one that would exceed
/// [`MAX_PIXELS`] is an error.
pub fn resize(buffer: &ImageBuffer, x_scale: f64, y_scale: f64) -> Result<ImageBuffer> {
    check_scale('x', x_scale)?;
    check_scale('y', y_scale)?;

    let (old_w, old_h) = buffer.dimensions();
    let new_w = scaled_dimension(old_w, x_scale);
    let new_h = scaled_dimension(old_h, y_scale);
    check_size(new_w, new_h)?;

    log::debug!(
        "Resizing {}x{} -> {}x{} (x{}, x{})",
        old_w,
        old_h,
        new_w,
        new_h,
        x_scale,
        y_scale
    );

    // Column lookup is the same for every row
    let columns: Vec<u32> = (0..new_w)
        .map(|x| source_coord(x, x_scale, old_w))
        .collect();

    let mut row_src = 0;
    Ok(ImageBuffer::from_fn(new_w, new_h, |x, y| {
        if x == 0 {
            row_src = source_coord(y, y_scale, old_h);
        }
        buffer
            .pixel(columns[x as usize], row_src)
            .unwrap_or_default()
    }))
}
