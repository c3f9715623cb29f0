//! Text rendering with optional 24-bit ANSI color.

use std::fmt::Write;

use super::charset::glyph_for;
use crate::bitmap::{ImageBuffer, Pixel};

/// ANSI reset sequence, emitted after every colored glyph.
pub const RESET: &str = "\x1b[0m";

/// How each glyph is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Glyph only
    #[default]
    Plain,
    /// Glyph drawn in the pixel's color (ESC[38;2;R;G;Bm)
    Foreground,
    /// Glyph drawn over the pixel's color (ESC[48;2;R;G;Bm)
    Background,
}

impl RenderMode {
    /// SGR selector for the colored modes.
    fn sgr(&self) -> Option<u8> {
        match self {
            RenderMode::Plain => None,
            RenderMode::Foreground => Some(38),
            RenderMode::Background => Some(48),
        }
    }

    /// Append `glyph` to `out`, wrapped according to this mode.
    pub fn wrap(&self, pixel: Pixel, glyph: char, out: &mut String) {
        match self.sgr() {
            None => out.push(glyph),
            Some(sgr) => {
                // Writing to a String cannot fail
                let _ = write!(
                    out,
                    "\x1b[{};2;{};{};{}m{}{}",
                    sgr, pixel.r, pixel.g, pixel.b, glyph, RESET
                );
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RenderMode::Plain => "plain",
            RenderMode::Foreground => "foreground",
            RenderMode::Background => "background",
        }
    }
}

/// Render `buffer` as ASCII art.
///
/// Rows are emitted top to bottom, each terminated by a single `\n`.
pub fn render(buffer: &ImageBuffer, mode: RenderMode) -> String {
    let mut out = String::new();
    render_into(buffer, mode, &mut out);
    out
}

/// Render into an existing string, clearing it first.
///
/// Returns the number of bytes written.
pub fn render_into(buffer: &ImageBuffer, mode: RenderMode, out: &mut String) -> usize {
    out.clear();

    let (width, height) = buffer.dimensions();
    // Plain output is one byte per glyph plus the newline
    let per_glyph = if mode == RenderMode::Plain { 1 } else { 24 };
    out.reserve((width as usize * per_glyph + 1) * height as usize);

    for y in 0..height {
        for x in 0..width {
            if let Some(pixel) = buffer.pixel(x, y) {
                mode.wrap(pixel, glyph_for(pixel.brightness()), out);
            }
        }
        out.push('\n');
    }

    out.len()
}
