use serde::Deserialize;

/// Current-conditions payload as returned by the weather endpoint (metric units).
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherPayload {
    pub name: String,
    #[serde(default)]
    pub sys: SysPayload,
    pub main: MainPayload,
    #[serde(default)]
    pub weather: Vec<ConditionPayload>,
    pub wind: WindPayload,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SysPayload {
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainPayload {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConditionPayload {
    pub main: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WindPayload {
    /// Metres per second.
    pub speed: f64,
}

/// Rounded values ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherReport {
    pub location: String,
    pub country: String,
    pub temperature_c: i64,
    pub feels_like_c: i64,
    pub humidity: i64,
    pub condition: String,
    pub wind_kmh: i64,
}

impl WeatherPayload {
    /// `None` when the payload carries no condition entry.
    pub fn into_report(self) -> Option<WeatherReport> {
        let condition = self.weather.into_iter().next()?.main;
        Some(WeatherReport {
            location: self.name,
            country: self.sys.country,
            temperature_c: self.main.temp.round() as i64,
            feels_like_c: self.main.feels_like.round() as i64,
            humidity: self.main.humidity.round() as i64,
            condition,
            wind_kmh: (self.wind.speed * 3.6).round() as i64,
        })
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/weather.rs"]
mod tests;
