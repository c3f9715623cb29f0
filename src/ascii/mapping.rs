//! Pixel brightness.

/// Perceptual brightness with 2:3:1 weights, `(2r + 3g + b) / 6`.
///
/// Integer division throughout, so the result is always in `0..=255`.
#[inline]
pub fn brightness(r: u8, g: u8, b: u8) -> u32 {
    (2 * u32::from(r) + 3 * u32::from(g) + u32::from(b)) / 6
}
