use super::error::ConfigError;
use std::{env, fs::create_dir_all, path::PathBuf};

/// Overrides where the configuration file lives
pub const CONFIG_PATH_ENV: &str = "POOL_CONSOLE_CONFIG";

/// Grab config path
pub fn xdg_config_home() -> Result<PathBuf, ConfigError> {
    let home = env::var("HOME").map_err(|_| ConfigError::NoHome)?;
    let path = PathBuf::from(format!("{home}/.config/pool-console"));
    // If the directory doesnt exist yet, make it!
    if !path.exists() {
        create_dir_all(&path)?;
    }
    Ok(path)
}

/// Location of the global configuration file
pub fn config_path() -> Result<PathBuf, ConfigError> {
    match env::var_os(CONFIG_PATH_ENV) {
        Some(path) => Ok(PathBuf::from(path)),
        None => Ok(xdg_config_home()?.join("config.json")),
    }
}
