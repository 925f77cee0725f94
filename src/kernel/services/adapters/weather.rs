//! Blocking HTTP client for current weather conditions.

use std::time::Duration;

use crate::kernel::services::ports::{WeatherPayload, WeatherReport, WeatherSettings};

use super::settings::API_KEY_ENV;

#[derive(Debug)]
pub enum WeatherError {
    MissingApiKey,
    Transport(String),
    Status(u16),
    Malformed(String),
}

impl std::fmt::Display for WeatherError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeatherError::MissingApiKey => write!(f, "no weather API key configured"),
            WeatherError::Transport(e) => write!(f, "weather request failed: {}", e),
            WeatherError::Status(code) => write!(f, "weather service returned HTTP {}", code),
            WeatherError::Malformed(e) => write!(f, "unexpected weather payload: {}", e),
        }
    }
}

impl std::error::Error for WeatherError {}

#[derive(Debug, Clone)]
pub struct WeatherClient {
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl WeatherClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
            timeout,
        }
    }

    /// The key from settings, else from `OPENWEATHER_API_KEY`.
    pub fn from_settings(settings: &WeatherSettings) -> Self {
        let api_key = settings
            .api_key
            .clone()
            .filter(|k| !k.is_empty())
            .or_else(|| std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty()));
        Self::new(
            settings.base_url.clone(),
            api_key,
            Duration::from_secs(settings.timeout_secs),
        )
    }

    pub fn fetch(&self, location: &str) -> Result<WeatherReport, WeatherError> {
        let key = self.api_key.as_deref().ok_or(WeatherError::MissingApiKey)?;
        let response = ureq::get(&self.base_url)
            .query("q", location)
            .query("appid", key)
            .query("units", "metric")
            .timeout(self.timeout)
            .call()
            .map_err(|e| match e {
                ureq::Error::Status(code, _) => WeatherError::Status(code),
                ureq::Error::Transport(t) => WeatherError::Transport(t.to_string()),
            })?;
        let body = response
            .into_string()
            .map_err(|e| WeatherError::Transport(e.to_string()))?;
        parse_report(&body)
    }
}

pub fn parse_report(body: &str) -> Result<WeatherReport, WeatherError> {
    let payload: WeatherPayload =
        serde_json::from_str(body).map_err(|e| WeatherError::Malformed(e.to_string()))?;
    payload
        .into_report()
        .ok_or_else(|| WeatherError::Malformed("no condition entry".to_string()))
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/weather.rs"]
mod tests;
