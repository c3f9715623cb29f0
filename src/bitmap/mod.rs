//! Bitmap handling: the in-memory pixel buffer plus PNG load, resize and save.
//!
//! The pipeline uses these in order:
//!
//! 1. **Loading** - decode a PNG file into an [`ImageBuffer`]
//! 2. **Resizing** - nearest-neighbor resample by independent x/y factors
//! 3. **Encoding** - write a buffer back out as a PNG file

mod buffer;
mod encoder;
mod loader;
mod resize;

pub use buffer::{ImageBuffer, Pixel};
pub use encoder::save_png;
pub use loader::load;
pub use resize::{resize, scaled_dimension};
pub(crate) use resize::check_scale;
