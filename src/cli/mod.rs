//! Command-line interface definitions and helpers.
//!
//! This module contains CLI argument parsing and subcommand handlers.

mod args;
mod commands;

pub use args::{Args, Command, ConfigAction, Mode};
pub use commands::{handle_config_action, init_config, show_config};
