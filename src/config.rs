//! Settings parser for the devopen configuration file
//!
//! Supports:
//! - `<config dir>/devopen/config.toml` - enabled editor plugins, workspace
//!   root, default database

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "devopen";

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub editors: EditorsSettings,

    #[serde(default)]
    pub workspace: WorkspaceSettings,

    #[serde(default)]
    pub database: DatabaseSettings,
}

/// Which editor plugins are enabled
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EditorsSettings {
    /// Names of enabled editor plugins (e.g., "vscode", "zed").
    /// The open command requires exactly one.
    #[serde(default)]
    pub enabled: Vec<String>,
}

/// Where project checkouts live
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WorkspaceSettings {
    /// Root directory for repository checkouts, laid out as <root>/owner/name.
    /// Defaults to <data dir>/devopen/repositories.
    #[serde(default)]
    pub root: Option<PathBuf>,
}

/// Database defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DatabaseSettings {
    /// Database used when the command is invoked without one
    #[serde(default)]
    pub default: Option<String>,
}

/// Resolve the devopen configuration directory.
///
/// `DEVOPEN_CONFIG_DIR` overrides the platform default; useful for tests
/// and for pointing several checkouts at one shared configuration.
pub fn config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os("DEVOPEN_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Load settings from `config.toml` in the given directory.
///
/// A missing or unparsable file falls back to defaults; configuration
/// problems should never keep the command from reporting a precise error
/// later (e.g., "no editor is enabled").
pub fn load_settings(config_dir: &Path) -> Settings {
    let config_path = config_dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}
