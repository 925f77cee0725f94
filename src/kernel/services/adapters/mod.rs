//! Service adapters: OS/runtime specific implementations (IO/async).

pub mod paths;
pub mod runtime;
pub mod settings;
pub mod weather;

pub use paths::{ensure_log_dir, get_log_dir, get_settings_path};
pub use runtime::{AppMessage, AsyncRuntime};
pub use settings::{load_settings, startup_theme};
pub use weather::{WeatherClient, WeatherError};
