//! CLI argument parsing with clap.

use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::pipeline_config::ConvertOverrides;

/// Convert a PNG image into ASCII art or a resized PNG
#[derive(Parser, Debug)]
#[command(name = "ascii-converter")]
#[command(version, about = "Convert PNG images to ASCII art", long_about = None)]
#[command(after_help = "FORMATS:
    0  plain text
    1  foreground colored text (24-bit ANSI)
    2  background colored text (24-bit ANSI)
    3  png

EXAMPLES:
    ascii-converter -f photo.png --xscale 0.2 --yscale 0.1
    ascii-converter -f photo.png --format 1 -o photo.txt
    ascii-converter -f photo.png --xscale 2 --yscale 2 --format 3 -o big.png")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the input .png file (required unless running a subcommand)
    #[arg(short = 'f', long = "file")]
    pub file: Option<PathBuf>,

    /// Scaling factor for the x axis [default: 1.0]
    #[arg(long, allow_negative_numbers = true)]
    pub xscale: Option<f64>,

    /// Scaling factor for the y axis [default: 1.0]
    #[arg(long, allow_negative_numbers = true)]
    pub yscale: Option<f64>,

    /// Output format (0-3, see FORMATS) [default: 0]
    #[arg(long, allow_negative_numbers = true)]
    pub format: Option<i64>,

    /// Output file path [default: out.txt]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// What a parsed command line asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode<'a> {
    /// Run a `config` subcommand
    Config(&'a ConfigAction),
    /// Convert the given input file
    Convert(&'a Path),
}

impl Args {
    /// Decide between a subcommand and a conversion.
    ///
    /// Without a subcommand `--file` is required; its absence is reported as
    /// a clap usage error so it prints and exits like any other.
    pub fn mode(&self) -> Result<Mode<'_>, clap::Error> {
        match (&self.command, &self.file) {
            (Some(Command::Config { action }), _) => Ok(Mode::Config(action)),
            (None, Some(file)) => Ok(Mode::Convert(file)),
            (None, None) => Err(Args::command().error(
                ErrorKind::MissingRequiredArgument,
                "the following required arguments were not provided:\n  --file <FILE>",
            )),
        }
    }

    /// Conversion settings given explicitly on the command line.
    pub fn overrides(&self) -> ConvertOverrides {
        ConvertOverrides {
            xscale: self.xscale,
            yscale: self.yscale,
            format: self.format,
            output: self.output.clone(),
        }
    }

    /// Log filter implied by `-v` flags.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
