//! Resolved settings for a single conversion run.

use std::path::PathBuf;

use crate::ascii::RenderMode;
use crate::config::ConvertConfig;
use crate::error::{ConvertError, Result};

/// Built-in scale factor when neither flag nor config sets one.
pub const DEFAULT_SCALE: f64 = 1.0;
/// Built-in output format selector.
pub const DEFAULT_FORMAT: i64 = 0;
/// Built-in output path.
pub const DEFAULT_OUTPUT: &str = "out.txt";

/// What the pipeline writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Glyphs only
    #[default]
    PlainText,
    /// Glyphs colored with the pixel's RGB
    ForegroundText,
    /// Glyphs over a background of the pixel's RGB
    BackgroundText,
    /// The resized pixel grid as a PNG file
    Png,
}

impl OutputFormat {
    /// Render mode for the text formats, `None` for [`OutputFormat::Png`].
    pub fn render_mode(&self) -> Option<RenderMode> {
        match self {
            OutputFormat::PlainText => Some(RenderMode::Plain),
            OutputFormat::ForegroundText => Some(RenderMode::Foreground),
            OutputFormat::BackgroundText => Some(RenderMode::Background),
            OutputFormat::Png => None,
        }
    }

    /// Numeric selector used on the command line.
    pub fn selector(&self) -> i64 {
        match self {
            OutputFormat::PlainText => 0,
            OutputFormat::ForegroundText => 1,
            OutputFormat::BackgroundText => 2,
            OutputFormat::Png => 3,
        }
    }
}

impl TryFrom<i64> for OutputFormat {
    type Error = ConvertError;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            0 => Ok(OutputFormat::PlainText),
            1 => Ok(OutputFormat::ForegroundText),
            2 => Ok(OutputFormat::BackgroundText),
            3 => Ok(OutputFormat::Png),
            other => Err(ConvertError::InvalidFormat(other)),
        }
    }
}

/// Everything needed to run one conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub x_scale: f64,
    pub y_scale: f64,
    pub format: OutputFormat,
}

/// Values given on the command line; `None` means the flag was absent.
#[derive(Debug, Clone, Default)]
pub struct ConvertOverrides {
    pub xscale: Option<f64>,
    pub yscale: Option<f64>,
    pub format: Option<i64>,
    pub output: Option<PathBuf>,
}

impl ConvertOptions {
    /// Merge settings: CLI args > config file > built-in defaults.
    ///
    /// Fails if the resulting format selector is not one of the known values.
    pub fn resolve(
        input: PathBuf,
        cli: &ConvertOverrides,
        config: &ConvertConfig,
    ) -> Result<Self> {
        let format = cli.format.or(config.format).unwrap_or(DEFAULT_FORMAT);
        Ok(Self {
            input,
            output: cli
                .output
                .clone()
                .or_else(|| config.output.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            x_scale: cli.xscale.or(config.xscale).unwrap_or(DEFAULT_SCALE),
            y_scale: cli.yscale.or(config.yscale).unwrap_or(DEFAULT_SCALE),
            format: OutputFormat::try_from(format)?,
        })
    }
}
