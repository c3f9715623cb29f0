//! ascii-converter library crate.
//!
//! Decodes a PNG, optionally rescales it with nearest-neighbor sampling, and
//! renders it as ASCII art (plain or 24-bit colored) or re-encodes it as PNG.

pub mod ascii;
pub mod bitmap;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod pipeline_config;

pub use error::{ConvertError, Result};
