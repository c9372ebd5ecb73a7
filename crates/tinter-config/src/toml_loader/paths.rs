use std::path::{Path, PathBuf};

use tinter_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

const APP_DIR: &str = "tinter";
const CONFIG_FILE: &str = "tinter.toml";

/// `<platform config dir>/tinter`, home of `tinter.toml` and an optional `.env`.
pub fn app_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))
}

pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_config_dir()?.join(CONFIG_FILE))
}

/// Write the commented default config, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let io_error = |what: &str, target: &Path, e: std::io::Error| {
        ConfigError::ParseError(format!("failed to {what} {}: {e}", target.display()))
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_error("create config directory", parent, e))?;
    }
    std::fs::write(path, default_config_toml()).map_err(|e| io_error("write default config to", path, e))?;

    info!(path = %path.display(), "created default config");
    Ok(())
}
