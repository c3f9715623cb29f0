//! The brightness ramp.

/// Brightness thresholds (inclusive upper bounds) and their glyphs, darkest first.
///
/// The first entry whose threshold is `>=` the brightness wins. Anything above
/// the last threshold maps to [`BRIGHTEST_GLYPH`].
pub const GLYPH_RAMP: [(u32, char); 9] = [
    (25, ' '),
    (50, '.'),
    (75, ':'),
    (100, '-'),
    (125, '='),
    (150, '+'),
    (175, '*'),
    (200, '#'),
    (225, '%'),
];

/// Glyph for brightness above every threshold in [`GLYPH_RAMP`].
pub const BRIGHTEST_GLYPH: char = '@';

/// Map a brightness value to its glyph.
#[inline]
pub fn glyph_for(brightness: u32) -> char {
    GLYPH_RAMP
        .iter()
        .find(|&&(threshold, _)| brightness <= threshold)
        .map_or(BRIGHTEST_GLYPH, |&(_, glyph)| glyph)
}
