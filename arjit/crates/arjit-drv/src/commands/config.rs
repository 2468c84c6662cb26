//! Config command implementation.
//!
//! Prints the effective configuration as TOML, or writes it to a file.

use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::Config;
use crate::error::{DrvError, Result};

/// Arguments for the config command.
#[derive(Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Write the configuration here instead of printing it.
    pub write: Option<PathBuf>,
}

/// Run the config command, printing to stdout.
pub fn run_config(args: ConfigArgs, config: Config) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_config_to(&mut out, args, &config)
}

/// Run the config command, printing to `out`.
pub fn run_config_to<W: Write>(out: &mut W, args: ConfigArgs, config: &Config) -> Result<()> {
    match args.write {
        Some(path) => {
            config.save_to_path(&path)?;
            tracing::info!(path = %path.display(), "wrote configuration");
        },
        None => {
            let content = toml::to_string_pretty(config).map_err(|e| {
                DrvError::Config(format!("Failed to serialize configuration: {}", e))
            })?;
            write!(out, "{}", content)?;
        },
    }
    Ok(())
}
