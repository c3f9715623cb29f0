//! Subcommand handlers for config actions.

use std::io::Write;
use std::path::Path;

use super::args::ConfigAction;
use crate::config::{Config, DEFAULT_CONFIG};
use crate::pipeline_config::{DEFAULT_FORMAT, DEFAULT_OUTPUT, DEFAULT_SCALE};

/// Handle config subcommand actions, writing to stdout.
pub fn handle_config_action(
    action: &ConfigAction,
    config: &Config,
    config_path: &Path,
) -> Result<(), String> {
    match action {
        ConfigAction::Show => {
            let stdout = std::io::stdout();
            show_config(config, config_path, &mut stdout.lock())
                .map_err(|e| format!("Failed to print configuration: {}", e))
        }
        ConfigAction::Init => {
            init_config(config_path)?;
            println!("Created config file: {}", config_path.display());
            Ok(())
        }
    }
}

/// Print the effective conversion defaults and where they came from.
pub fn show_config(config: &Config, config_path: &Path, out: &mut impl Write) -> std::io::Result<()> {
    let c = &config.convert;
    writeln!(out, "Current configuration:")?;
    writeln!(out, "  X scale: {}", c.xscale.unwrap_or(DEFAULT_SCALE))?;
    writeln!(out, "  Y scale: {}", c.yscale.unwrap_or(DEFAULT_SCALE))?;
    writeln!(out, "  Format: {}", c.format.unwrap_or(DEFAULT_FORMAT))?;
    writeln!(
        out,
        "  Output: {}",
        c.output
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_OUTPUT))
            .display()
    )?;
    writeln!(out)?;

    if config_path.exists() {
        writeln!(out, "Config file: {} (exists)", config_path.display())
    } else {
        writeln!(out, "Config file: {} (not found)", config_path.display())
    }
}

/// Write the default config file. Refuses to overwrite an existing one.
pub fn init_config(config_path: &Path) -> Result<(), String> {
    if config_path.exists() {
        return Err(format!(
            "Config file already exists: {}\nUse 'ascii-converter config show' to view current settings.",
            config_path.display()
        ));
    }

    // Create parent directories if needed
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Error creating config directory: {}", e))?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .map_err(|e| format!("Error writing config file: {}", e))
}
