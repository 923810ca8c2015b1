//! XDG-style location of the configuration directory.
//!
//! `$XDG_CONFIG_HOME` is honored on every platform, so the config file lives
//! in the same place on Linux and macOS.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "trans";

/// Returns the configuration directory for trans.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/trans` if `XDG_CONFIG_HOME` is set and non-empty
/// 2. `~/.config/trans` otherwise
pub fn config_dir() -> Result<PathBuf> {
    match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join(APP_DIR)),
        _ => Ok(home_dir()?.join(".config").join(APP_DIR)),
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Failed to determine home directory")
}
