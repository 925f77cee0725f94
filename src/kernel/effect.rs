use super::session::SessionId;
use super::theme::ThemeName;

/// Side effects requested by the store and carried out by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchWeather { session: SessionId, location: String },
    PersistTheme(ThemeName),
    Quit,
}
