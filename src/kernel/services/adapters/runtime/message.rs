use crate::kernel::services::ports::WeatherReport;
use crate::kernel::session::SessionId;

#[derive(Debug)]
pub enum AppMessage {
    WeatherLoaded {
        session: SessionId,
        report: WeatherReport,
    },
    WeatherFailed {
        session: SessionId,
    },
}
