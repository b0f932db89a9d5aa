mod config;

pub use config::{Config, HostConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Environment variable that overrides the configuration file location.
pub const CONFIG_ENV: &str = "EYECARE_CONFIG";

/// Returns `$EYECARE_CONFIG`, or `~/.config/eyecare/config.toml`.
///
/// Nothing is created on disk.
///
/// # Errors
/// Returns an error if `EYECARE_CONFIG` is set but empty.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        if path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: CONFIG_ENV.to_string(),
                message: "path is empty".into(),
            });
        }
        return Ok(PathBuf::from(path));
    }

    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");
    Ok(base_dir.join("eyecare").join("config.toml"))
}
