//! Per-user directories for logs and settings.
//!
//! - macOS: ~/Library/Application Support/termfolio
//! - Linux: $XDG_DATA_HOME/termfolio (logs), $XDG_CONFIG_HOME/termfolio (settings)
//! - Windows: %APPDATA%\termfolio
//!
//! `TERMFOLIO_DATA_DIR` replaces both roots.

use std::path::PathBuf;

const APP_NAME: &str = "termfolio";
const LOG_DIR: &str = "logs";
const SETTINGS_FILE: &str = "settings.json";
pub const DATA_DIR_ENV: &str = "TERMFOLIO_DATA_DIR";

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// An explicit override wins; otherwise the platform directory gets the app name appended.
fn resolve(override_root: Option<PathBuf>, platform_root: Option<PathBuf>) -> Option<PathBuf> {
    override_root.or_else(|| platform_root.map(|p| p.join(APP_NAME)))
}

fn platform_data_root() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        env_path("HOME").map(|home| home.join("Library/Application Support"))
    }

    #[cfg(target_os = "linux")]
    {
        env_path("XDG_DATA_HOME").or_else(|| env_path("HOME").map(|home| home.join(".local/share")))
    }

    #[cfg(target_os = "windows")]
    {
        env_path("APPDATA")
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

fn platform_config_root() -> Option<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        env_path("XDG_CONFIG_HOME").or_else(|| env_path("HOME").map(|home| home.join(".config")))
    }

    #[cfg(not(target_os = "linux"))]
    {
        platform_data_root()
    }
}

pub fn app_data_dir() -> Option<PathBuf> {
    resolve(env_path(DATA_DIR_ENV), platform_data_root())
}

pub fn app_config_dir() -> Option<PathBuf> {
    resolve(env_path(DATA_DIR_ENV), platform_config_root())
}

pub fn get_log_dir() -> Option<PathBuf> {
    app_data_dir().map(|p| p.join(LOG_DIR))
}

pub fn get_settings_path() -> Option<PathBuf> {
    app_config_dir().map(|p| p.join(SETTINGS_FILE))
}

pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = get_log_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine log directory",
        )
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/paths.rs"]
mod tests;
