use std::fs;
use std::path::{Path, PathBuf};

use super::AppConfig;
use crate::error::{Error, Result};

/// Returns the platform-specific base config directory.
///
/// Resolution order:
/// 1. `XDG_CONFIG_HOME`
/// 2. `$HOME/.config`
/// 3. `%USERPROFILE%/.config`
pub fn config_base_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg));
    }
    if let Some(home) = std::env::var_os("HOME") {
        return Some(PathBuf::from(home).join(".config"));
    }
    std::env::var_os("USERPROFILE").map(|home| PathBuf::from(home).join(".config"))
}

/// Returns the path to `~/.config/editor-menu/config.ron`.
pub fn config_path() -> Option<PathBuf> {
    config_base_dir().map(|base| base.join("editor-menu").join("config.ron"))
}

/// Reads and parses a config file.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let contents = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ron::from_str(&contents)?)
}

/// Loads the user config, falling back to defaults on any error.
pub fn load_config() -> AppConfig {
    let Some(path) = config_path() else {
        return AppConfig::default();
    };
    if !path.exists() {
        return AppConfig::default();
    }
    match load_config_from(&path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("ignoring unreadable config: {e}");
            AppConfig::default()
        }
    }
}

/// Writes `config` to `path`, creating parent directories.
pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<()> {
    let write_err = |source| Error::ConfigWrite {
        path: path.to_path_buf(),
        source,
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(write_err)?;
    }
    let pretty = ron::ser::PrettyConfig::default();
    let serialized = ron::ser::to_string_pretty(config, pretty)?;
    fs::write(path, serialized).map_err(write_err)
}

/// Persists the user config.
pub fn save_config(config: &AppConfig) -> Result<()> {
    let path = config_path().ok_or(Error::NoConfigDir)?;
    save_config_to(&path, config)
}
