use super::*;

#[test]
fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = load_settings_from(&dir.path().join("settings.json"));
    assert_eq!(settings, Settings::default());
}

#[test]
fn malformed_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert_eq!(load_settings_from(&path), Settings::default());
}

#[test]
fn persist_theme_creates_parents_and_keeps_other_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let mut initial = Settings::default();
    initial.weather.api_key = Some("k".to_string());
    save_settings_to(&path, &initial).unwrap();

    persist_theme_to(&path, ThemeName::Dracula).unwrap();

    let loaded = load_settings_from(&path);
    assert_eq!(loaded.theme, "dracula");
    assert_eq!(loaded.weather.api_key.as_deref(), Some("k"));
}

#[test]
fn save_replaces_file_without_leaving_temp_behind() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    let mut settings = Settings::default();
    settings.theme = "nord".to_string();
    save_settings_to(&path, &settings).unwrap();

    assert_eq!(load_settings_from(&path), settings);
    let names: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from("settings.json")]);
}

#[test]
fn theme_resolution_prefers_valid_override() {
    let mut settings = Settings::default();
    settings.theme = "nord".to_string();
    assert_eq!(resolve_theme(&settings, None), ThemeName::Nord);
    assert_eq!(resolve_theme(&settings, Some("solarized")), ThemeName::Solarized);
    assert_eq!(resolve_theme(&settings, Some("bogus")), ThemeName::Nord);

    settings.theme = "unknown".to_string();
    assert_eq!(resolve_theme(&settings, None), ThemeName::Default);
}
