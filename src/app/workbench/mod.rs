//! Workbench: owns the store, routes terminal input to kernel actions and draws every pane.

use super::theme::{detect_terminal_color_support, TerminalColorSupport, UiTheme};
use crate::kernel::services::adapters::{AppMessage, AsyncRuntime, WeatherClient};
use crate::kernel::{Action as KernelAction, AppState, SessionId, Store};
use crate::tui::{EventResult, InputEvent, View};
use ratatui::layout::Rect;
use ratatui::Frame;
use std::path::PathBuf;
use std::time::Duration;

mod bridge;
mod input;
mod render;
mod tick;
mod util;

const STATUS_HEIGHT: u16 = 1;
/// Poll interval while an effect is animating.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const IDLE_INTERVAL: Duration = Duration::from_millis(250);

pub struct Workbench {
    store: Store,
    theme: UiTheme,
    color_support: TerminalColorSupport,
    runtime: AsyncRuntime,
    weather: WeatherClient,
    settings_path: Option<PathBuf>,
    /// Outer rect of every pane as last drawn, in layout order.
    pane_areas: Vec<(SessionId, Rect)>,
    modal_area: Option<Rect>,
    cursor: Option<(u16, u16)>,
    should_quit: bool,
}

impl Workbench {
    pub fn new(
        store: Store,
        runtime: AsyncRuntime,
        weather: WeatherClient,
        settings_path: Option<PathBuf>,
    ) -> Self {
        Self::with_color_support(
            store,
            runtime,
            weather,
            settings_path,
            detect_terminal_color_support(),
        )
    }

    pub fn with_color_support(
        store: Store,
        runtime: AsyncRuntime,
        weather: WeatherClient,
        settings_path: Option<PathBuf>,
        color_support: TerminalColorSupport,
    ) -> Self {
        let theme = UiTheme::new(store.state().theme, color_support);
        Self {
            store,
            theme,
            color_support,
            runtime,
            weather,
            settings_path,
            pane_areas: Vec::new(),
            modal_area: None,
            cursor: None,
            should_quit: false,
        }
    }

    pub fn handle_message(&mut self, msg: AppMessage) -> bool {
        match msg {
            AppMessage::WeatherLoaded { session, report } => {
                self.dispatch_kernel(KernelAction::WeatherLoaded { session, report })
            }
            AppMessage::WeatherFailed { session } => {
                self.dispatch_kernel(KernelAction::WeatherFailed { session })
            }
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// How long the host may block waiting for input before the next tick is due.
    pub fn poll_interval(&self) -> Duration {
        let state = self.store.state();
        if state.rain.is_some() || state.snake.is_some() {
            FRAME_INTERVAL
        } else {
            IDLE_INTERVAL
        }
    }
}

impl View for Workbench {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        input::handle_input(self, event)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        render::render(self, frame, area);
    }

    fn cursor_position(&self) -> Option<(u16, u16)> {
        self.cursor
    }
}
