use super::*;

#[test]
fn empty_object_fills_every_default() {
    let settings: Settings = serde_json::from_str("{}").expect("deserialize Settings");
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.theme, "default");
    assert_eq!(settings.weather.base_url, DEFAULT_WEATHER_URL);
    assert_eq!(settings.weather.timeout_secs, DEFAULT_WEATHER_TIMEOUT_SECS);
}

#[test]
fn partial_weather_section_keeps_other_defaults() {
    let json = r#"{ "theme": "nord", "weather": { "api_key": "abc" } }"#;
    let settings: Settings = serde_json::from_str(json).expect("deserialize Settings");
    assert_eq!(settings.theme, "nord");
    assert_eq!(settings.weather.api_key.as_deref(), Some("abc"));
    assert_eq!(settings.weather.base_url, DEFAULT_WEATHER_URL);
}

#[test]
fn missing_api_key_is_not_serialized() {
    let json = serde_json::to_string(&Settings::default()).expect("serialize Settings");
    assert!(!json.contains("api_key"));
}
