//! Centralized configuration paths for harmoniq
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/harmoniq/`
//! - Windows: `%APPDATA%\harmoniq\`
//!
//! This module is the single source of truth for config paths.

use std::{env, fs, path::PathBuf};

const APP_DIR: &str = "harmoniq";

/// Base config directory for harmoniq
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/harmoniq`
///   - Else: `~/.config/harmoniq`
///
/// Windows:
///   - `%APPDATA%\harmoniq`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/harmoniq/drag.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("drag.yaml"))
}

/// `~/.config/harmoniq/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let dir = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    fs::create_dir_all(&dir)
        .map_err(|e| format!("Failed to create logs directory {}: {}", dir.display(), e))?;
    Ok(dir)
}
