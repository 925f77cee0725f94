use super::*;

#[test]
fn parse_is_case_insensitive() {
    assert_eq!(ThemeName::parse("Dracula"), Some(ThemeName::Dracula));
    assert_eq!(ThemeName::parse(" nord "), Some(ThemeName::Nord));
    assert_eq!(ThemeName::parse("monokai"), None);
}

#[test]
fn unknown_theme_falls_back_to_default() {
    assert_eq!(ThemeName::parse_or_default(""), ThemeName::Default);
    assert_eq!(ThemeName::parse_or_default("monokai"), ThemeName::Default);
    assert_eq!(ThemeName::parse_or_default("solarized"), ThemeName::Solarized);
}

#[test]
fn names_round_trip_through_as_str() {
    for theme in ThemeName::ALL {
        assert_eq!(ThemeName::parse(theme.as_str()), Some(theme));
        assert_eq!(ThemeName::ALL[theme.index()], theme);
    }
}
