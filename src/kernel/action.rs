use std::time::Instant;

use super::fx::SnakeKey;
use super::layout::SplitDirection;
use super::services::ports::WeatherReport;
use super::session::SessionId;
use super::theme::ThemeName;

/// Everything that can change [`AppState`](super::AppState). Input actions target the active session.
#[derive(Debug, Clone)]
pub enum Action {
    InputChar(char),
    InputBackspace,
    Submit,
    HistoryUp,
    HistoryDown,
    Complete,
    Focus(SessionId),
    Split(SplitDirection),
    CloseActive,
    ClearActive,
    SetTheme(ThemeName),
    OpenThemePicker,
    /// Opens the pane menu for `session` at cell `anchor`.
    OpenPaneMenu {
        session: SessionId,
        anchor: (u16, u16),
    },
    ModalMove(isize),
    ModalSelect(usize),
    ModalConfirm,
    ModalClose,
    Snake(SnakeKey),
    PaneResized {
        session: SessionId,
        width: u16,
        height: u16,
    },
    WeatherLoaded {
        session: SessionId,
        report: WeatherReport,
    },
    WeatherFailed {
        session: SessionId,
    },
    Tick {
        now: Instant,
    },
    Quit,
}
