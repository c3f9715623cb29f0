//! ASCII renderer module for converting pixel buffers to ASCII art.
//!
//! Rendering happens in two steps:
//!
//! 1. **Character mapping** - each pixel's brightness picks a glyph from a
//!    fixed ten-step ramp
//! 2. **Color wrapping** - in the colored modes each glyph is wrapped in a
//!    24-bit ANSI escape sequence carrying the pixel's RGB
//!
//! Both steps are pure string building; nothing here touches the terminal.

mod charset;
mod mapping;
mod render;

pub use charset::{glyph_for, BRIGHTEST_GLYPH, GLYPH_RAMP};
pub use mapping::brightness;
pub use render::{render, render_into, RenderMode, RESET};
