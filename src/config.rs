use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths;

/// Starter theme cloned when none is given.
pub const DEFAULT_STARTER_THEME: &str = "ezekg/theme-juice-starter";

// ============================================================================
// Juice Config
// ============================================================================

/// User configuration stored in `config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JuiceConfig {
    /// VVV installation directory
    pub vvv_path: String,

    /// Starter theme cloned into new sites (`owner/repo` or a git URL)
    pub starter_theme: String,

    /// Default database host for new sites
    pub db_host: String,

    /// Site registry file, relative to the VVV directory
    pub registry_file: String,
}

impl Default for JuiceConfig {
    fn default() -> Self {
        Self {
            vvv_path: "~/vagrant".to_string(),
            starter_theme: DEFAULT_STARTER_THEME.to_string(),
            db_host: "vvv".to_string(),
            registry_file: "vvv-custom.yml".to_string(),
        }
    }
}

impl JuiceConfig {
    /// Path of the config file
    pub fn path() -> Result<PathBuf> {
        Ok(paths::config_dir()?.join("config.toml"))
    }

    /// Load config.toml, falling back to defaults when it does not exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("Config file {} does not exist, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Could not read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Invalid TOML format in {}", path.display()))?;

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}
