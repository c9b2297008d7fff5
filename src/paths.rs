//! Centralized path resolution for juice
//!
//! # Environment Variables
//!
//! - `JUICE_CONFIG_DIR` - Override config directory
//! - `JUICE_VVV_PATH` - Override the VVV installation directory (read by the CLI)
//!
//! # Path Resolution Priority
//!
//! For config_dir():
//! 1. `JUICE_CONFIG_DIR` environment variable
//! 2. `XDG_CONFIG_HOME/juice` (if set)
//! 3. `~/.config/juice`
//!
//! For vvv_dir():
//! 1. `--vvv-path` flag / `JUICE_VVV_PATH`
//! 2. `vvv_path` from config.toml
//! 3. `~/vagrant`

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Environment variable for config directory override
pub const ENV_CONFIG_DIR: &str = "JUICE_CONFIG_DIR";

/// Environment variable for VVV directory override
pub const ENV_VVV_PATH: &str = "JUICE_VVV_PATH";

/// Get the juice config directory path
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        let path = expand(&dir);
        log::debug!(
            "Using config dir from {}: {}",
            ENV_CONFIG_DIR,
            path.display()
        );
        return Ok(path);
    }

    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        let path = PathBuf::from(xdg_config).join("juice");
        log::debug!("Using XDG_CONFIG_HOME: {}", path.display());
        return Ok(path);
    }

    let home = dirs::home_dir().context("Could not determine home directory")?;
    let path = home.join(".config").join("juice");
    log::debug!("Using default config dir: {}", path.display());
    Ok(path)
}

/// Resolve the VVV installation directory.
///
/// `flag` carries the `--vvv-path` value (clap already folds in
/// `JUICE_VVV_PATH`); `configured` is the config file's `vvv_path`.
pub fn vvv_dir(flag: Option<&Path>, configured: &str) -> PathBuf {
    match flag {
        Some(path) => {
            let path = expand(&path.to_string_lossy());
            log::debug!("Using VVV dir from flag: {}", path.display());
            path
        }
        None => {
            let path = expand(configured);
            log::debug!("Using VVV dir from config: {}", path.display());
            path
        }
    }
}

/// Expand ~ and environment variables in a path string.
///
/// Unknown variables are left as written.
pub fn expand(path: &str) -> PathBuf {
    let expanded = shellexpand::full(path).unwrap_or(std::borrow::Cow::Borrowed(path));
    PathBuf::from(expanded.as_ref())
}

/// Make `path` absolute against `base` after expansion.
pub fn absolutize(path: &str, base: &Path) -> PathBuf {
    let expanded = expand(path);
    if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    }
}

// ============================================================================
// Tests
// ============================================================================
