//! Configuration loading and root folder resolution

use crate::{Error, Result};
use std::path::PathBuf;

/// Database file name inside the root folder
pub const DATABASE_FILE: &str = "gigboard.db";

/// Root folder resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. TOML config file
/// 4. OS-dependent compiled default (fallback)
pub fn resolve_root_folder(cli_arg: Option<&str>, env_var_name: &str) -> Result<PathBuf> {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return Ok(PathBuf::from(path));
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(env_var_name) {
        if !path.is_empty() {
            return Ok(PathBuf::from(path));
        }
    }

    // Priority 3: TOML config file
    if let Ok(config_path) = load_config_file() {
        if let Ok(toml_content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<toml::Value>(&toml_content) {
                if let Some(root_folder) = config.get("root_folder").and_then(|v| v.as_str()) {
                    return Ok(PathBuf::from(root_folder));
                }
            }
        }
    }

    // Priority 4: OS-dependent compiled default
    Ok(get_default_root_folder())
}

/// Ensure the root folder exists and return the database path inside it
pub fn prepare_root_folder(root_folder: &PathBuf) -> Result<PathBuf> {
    std::fs::create_dir_all(root_folder)?;
    Ok(root_folder.join(DATABASE_FILE))
}

/// Get default configuration file path for the platform
fn load_config_file() -> Result<PathBuf> {
    let config_dir = if cfg!(target_os = "linux") {
        // Try ~/.config/gigboard/config.toml first, then /etc/gigboard/config.toml
        let user_config = dirs::config_dir().map(|d| d.join("gigboard").join("config.toml"));
        let system_config = PathBuf::from("/etc/gigboard/config.toml");

        if let Some(path) = user_config {
            if path.exists() {
                return Ok(path);
            }
        }
        if system_config.exists() {
            return Ok(system_config);
        }
        return Err(Error::Config("No config file found".to_string()));
    } else {
        dirs::config_dir()
            .map(|d| d.join("gigboard").join("config.toml"))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?
    };

    if config_dir.exists() {
        Ok(config_dir)
    } else {
        Err(Error::Config(format!(
            "Config file not found: {:?}",
            config_dir
        )))
    }
}

/// Get OS-dependent default root folder path
fn get_default_root_folder() -> PathBuf {
    if cfg!(target_os = "linux") {
        // ~/.local/share/gigboard (or /var/lib/gigboard for system-wide)
        dirs::data_local_dir()
            .map(|d| d.join("gigboard"))
            .unwrap_or_else(|| PathBuf::from("/var/lib/gigboard"))
    } else if cfg!(target_os = "macos") {
        // ~/Library/Application Support/gigboard
        dirs::data_dir()
            .map(|d| d.join("gigboard"))
            .unwrap_or_else(|| PathBuf::from("/Library/Application Support/gigboard"))
    } else if cfg!(target_os = "windows") {
        // %LOCALAPPDATA%\gigboard
        dirs::data_local_dir()
            .map(|d| d.join("gigboard"))
            .unwrap_or_else(|| PathBuf::from("C:\\ProgramData\\gigboard"))
    } else {
        PathBuf::from("./gigboard_data")
    }
}
