use crate::kernel::services::ports::settings::Settings;
use crate::kernel::theme::ThemeName;
use std::io;
use std::path::Path;

use super::paths::get_settings_path;

pub const THEME_ENV: &str = "TERMFOLIO_THEME";
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Reads settings from `path`. A missing file yields defaults; a malformed one is logged and ignored.
pub fn load_settings_from(path: &Path) -> Settings {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Settings::default(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "settings unreadable, using defaults");
            return Settings::default();
        }
    };
    serde_json::from_str(&data).unwrap_or_else(|e| {
        tracing::warn!(path = %path.display(), error = %e, "settings malformed, using defaults");
        Settings::default()
    })
}

/// Writes a sibling temp file and renames it over `path`, so readers never see a partial file.
pub fn save_settings_to(path: &Path, settings: &Settings) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let content = serde_json::to_string_pretty(settings)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);
    std::fs::write(&tmp_path, content)?;
    std::fs::rename(&tmp_path, path).inspect_err(|_| {
        let _ = std::fs::remove_file(&tmp_path);
    })
}

/// Rewrites only the `theme` field, keeping everything else in the file.
pub fn persist_theme_to(path: &Path, theme: ThemeName) -> io::Result<()> {
    let mut settings = load_settings_from(path);
    settings.theme = theme.as_str().to_string();
    save_settings_to(path, &settings)
}

pub fn load_settings() -> Settings {
    match get_settings_path() {
        Some(path) => load_settings_from(&path),
        None => Settings::default(),
    }
}

/// `override_name` (from the environment) beats the stored preference.
pub fn resolve_theme(settings: &Settings, override_name: Option<&str>) -> ThemeName {
    match override_name.and_then(ThemeName::parse) {
        Some(theme) => theme,
        None => ThemeName::parse_or_default(&settings.theme),
    }
}

pub fn startup_theme(settings: &Settings) -> ThemeName {
    let env = std::env::var(THEME_ENV).ok();
    resolve_theme(settings, env.as_deref())
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/settings.rs"]
mod tests;
