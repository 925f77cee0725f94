//! Service ports: data contracts shared by the kernel and its adapters.

pub mod settings;
pub mod weather;

pub use settings::{Settings, WeatherSettings};
pub use weather::{WeatherPayload, WeatherReport};
