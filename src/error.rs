//! Error types for the conversion pipeline.
//!
//! Every variant is terminal: the binary reports it and exits non-zero.

use std::path::PathBuf;

/// Errors that can occur while converting an image.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Failed to open input file '{}': {source}", .path.display())]
    InputOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to decode '{}': {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to create output file '{}': {source}", .path.display())]
    OutputCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to encode '{}': {source}", .path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(
        "Invalid output format {0}: expected one of (0 = plain text, \
         1 = foreground colored text, 2 = background colored text, 3 = png)"
    )]
    InvalidFormat(i64),

    #[error("Invalid scale factor {axis}={value}: must be a finite number greater than 0")]
    InvalidScale {
        /// Axis name, `x` or `y`
        axis: char,
        value: f64,
    },

    #[error("Resized image would be {width}x{height}, too large to allocate")]
    TooLarge { width: u32, height: u32 },

    #[error("Pixel data holds {actual} pixels, expected {width}x{height}")]
    BufferSize {
        width: u32,
        height: u32,
        actual: usize,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_format_lists_choices() {
        let msg = ConvertError::InvalidFormat(99).to_string();
        assert!(msg.contains("99"));
        assert!(msg.contains("3 = png"));
    }

    #[test]
    fn test_input_open_names_path() {
        let err = ConvertError::InputOpen {
            path: PathBuf::from("missing.png"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("missing.png"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_invalid_scale_names_axis() {
        let msg = ConvertError::InvalidScale { axis: 'y', value: -1.0 }.to_string();
        assert!(msg.contains("y=-1"));
    }

    #[test]
    fn test_too_large_names_size() {
        let msg = ConvertError::TooLarge { width: 70000, height: 5 }.to_string();
        assert!(msg.contains("70000x5"));
    }
}
