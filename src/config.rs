//! Configuration file handling for ascii-converter.
//!
//! Loads configuration from `~/.config/ascii-converter/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration file structure for ascii-converter.
/// Loaded from ~/.config/ascii-converter/config.toml (or custom path via --config).
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub convert: ConvertConfig,
}

/// Defaults for a conversion run. Command-line flags override these.
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConvertConfig {
    #[serde(default)]
    pub xscale: Option<f64>,
    #[serde(default)]
    pub yscale: Option<f64>,
    #[serde(default)]
    pub format: Option<i64>,
    #[serde(default)]
    pub output: Option<PathBuf>,
}

/// Commented config written by `config init`.
pub const DEFAULT_CONFIG: &str = r#"# ascii-converter configuration

[convert]
# Scale factor for the x axis (1.0 = unchanged)
xscale = 1.0
# Scale factor for the y axis (1.0 = unchanged)
yscale = 1.0
# Output format: 0 = plain text, 1 = foreground colored text,
# 2 = background colored text, 3 = png
format = 0
# Output file path
output = "out.txt"
"#;

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            Self::load_from_explicit(&path)
        } else {
            log::debug!("No config file at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Load configuration from a path the user asked for. A missing file is an error.
    pub fn load_from_explicit(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("ascii-converter").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/ascii-converter/config.toml")
        })
}
