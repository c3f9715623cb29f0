//! Flat RGBA pixel storage.

use crate::error::{ConvertError, Result};

/// A single RGBA sample with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::rgb(0, 0, 0);
    pub const WHITE: Pixel = Pixel::rgb(255, 255, 255);

    /// Create a pixel from all four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque pixel.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Perceptual brightness, `(2r + 3g + b) / 6`. Alpha is ignored.
    #[inline]
    pub fn brightness(&self) -> u32 {
        crate::ascii::brightness(self.r, self.g, self.b)
    }
}

impl From<Pixel> for image::Rgba<u8> {
    fn from(p: Pixel) -> Self {
        image::Rgba([p.r, p.g, p.b, p.a])
    }
}

/// A decoded image as a row-major array of pixels.
///
/// Invariant: `data.len() == width * height`. The pixel at `(x, y)` lives at
/// index `x + y * width`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    width: u32,
    height: u32,
    data: Vec<Pixel>,
}

impl ImageBuffer {
    /// Create a buffer of the given size filled with transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![Pixel::default(); width as usize * height as usize],
        }
    }

    /// Wrap existing pixel data, checking it matches the dimensions.
    pub fn from_pixels(width: u32, height: u32, data: Vec<Pixel>) -> Result<Self> {
        if data.len() != width as usize * height as usize {
            return Err(ConvertError::BufferSize {
                width,
                height,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a buffer by calling `f(x, y)` for every pixel in row-major order.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> Pixel,
    {
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width and height as a tuple.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Pixel] {
        &self.data
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(x as usize + y as usize * self.width as usize)
        } else {
            None
        }
    }

    /// Fetch the pixel at `(x, y)`, or `None` when out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        self.index(x, y).map(|i| self.data[i])
    }
}
