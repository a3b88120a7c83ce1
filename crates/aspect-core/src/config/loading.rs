//! Configuration loading.
//!
//! The only config source is the user file `~/.aspect/config.toml`. A missing
//! file is not an error: built-in defaults apply.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::types::AspectConfig;
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

/// Where a loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from this file.
    File(PathBuf),
    /// No file at this path; built-in defaults apply.
    Defaults(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Defaults(path) => write!(f, "defaults ({} not found)", path.display()),
        }
    }
}

/// Location of the user config file.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let home_dir = dirs::home_dir().ok_or(ConfigError::HomeDirUnavailable)?;
    Ok(home_dir.join(".aspect").join("config.toml"))
}

/// Load and validate the user configuration.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read, parsed or
/// validated. A missing file yields the defaults.
pub fn load_config() -> Result<AspectConfig, ConfigError> {
    load_config_with_source().map(|(config, _)| config)
}

/// Like [`load_config`], also reporting where the configuration came from.
///
/// Startup loads the config before logging is initialized, so callers log
/// the returned source themselves once a subscriber is installed.
pub fn load_config_with_source() -> Result<(AspectConfig, ConfigSource), ConfigError> {
    let path = config_path()?;
    load_config_with_source_from(&path)
}

/// Load and validate configuration from an explicit path.
pub fn load_config_from(path: &Path) -> Result<AspectConfig, ConfigError> {
    load_config_with_source_from(path).map(|(config, _)| config)
}

/// Load and validate configuration from an explicit path, reporting its source.
pub fn load_config_with_source_from(
    path: &Path,
) -> Result<(AspectConfig, ConfigSource), ConfigError> {
    let (config, source) = match load_config_file(path)? {
        Some(config) => {
            info!(event = "core.config.loaded", path = %path.display());
            (config, ConfigSource::File(path.to_path_buf()))
        }
        None => {
            debug!(event = "core.config.not_found", path = %path.display());
            (
                AspectConfig::default(),
                ConfigSource::Defaults(path.to_path_buf()),
            )
        }
    };

    validate_config(&config)?;
    Ok((config, source))
}

/// Like [`load_config`], but falls back to defaults on any error.
pub fn load_config_or_default() -> AspectConfig {
    match load_config() {
        Ok(config) => config,
        Err(e) => {
            warn!(
                event = "core.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            AspectConfig::default()
        }
    }
}

fn load_config_file(path: &Path) -> Result<Option<AspectConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let config = toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(Some(config))
}
