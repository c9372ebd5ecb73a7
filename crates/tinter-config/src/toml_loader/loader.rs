use std::path::Path;

use tinter_common::ConfigError;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};
use crate::schema::TinterConfig;
use crate::validation;

/// Load config from a TOML file.
///
/// Missing fields take serde defaults. Invalid values are logged and the
/// parsed config is returned as-is.
pub fn load_from_path(path: &Path) -> Result<TinterConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: TinterConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!(error = %e, "config has invalid values, using them as parsed");
    }

    info!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Load config from the platform default path, writing the commented
/// template there first if nothing exists yet.
///
/// On Linux: `~/.config/tinter/tinter.toml`
pub fn load_default() -> Result<TinterConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!(path = %path.display(), "no config found, creating default");
            create_default_config(&path)?;
            Ok(TinterConfig::default())
        }
        Err(e) => Err(e),
    }
}
