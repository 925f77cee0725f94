use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

use super::content;
use super::fx::{rain, snake, RainSurface, SnakeGame, Ticker};
use super::layout::LayoutTree;
use super::rich_text::RichText;
use super::session::{Session, SessionId, SessionRegistry};
use super::theme::ThemeName;

/// Ticks replayed at most per host poll; older ones are dropped.
pub const MAX_CATCH_UP: u32 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    Projects,
    Skills,
    Themes {
        selected: usize,
    },
    /// Right-click menu for the pane `target`, opened at cell `anchor`.
    PaneMenu {
        target: SessionId,
        anchor: (u16, u16),
        selected: usize,
    },
}

impl Modal {
    pub fn selected_mut(&mut self) -> Option<&mut usize> {
        match self {
            Modal::Themes { selected } | Modal::PaneMenu { selected, .. } => Some(selected),
            Modal::Projects | Modal::Skills => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneMenuItem {
    SplitHorizontal,
    SplitVertical,
    Close,
}

impl PaneMenuItem {
    pub fn label(self) -> &'static str {
        match self {
            PaneMenuItem::SplitHorizontal => "Split Horizontally",
            PaneMenuItem::SplitVertical => "Split Vertically",
            PaneMenuItem::Close => "Close Split",
        }
    }
}

const PANE_MENU: [PaneMenuItem; 3] = [
    PaneMenuItem::SplitHorizontal,
    PaneMenuItem::SplitVertical,
    PaneMenuItem::Close,
];

/// Rain effect bound to one session's pane.
#[derive(Debug)]
pub struct RainRunner {
    pub session: SessionId,
    pub surface: RainSurface,
    ticker: Option<Ticker>,
}

impl RainRunner {
    pub fn new(session: SessionId, area: (u16, u16)) -> Self {
        Self {
            session,
            surface: RainSurface::for_area(area.0, area.1),
            ticker: None,
        }
    }

    /// Steps the surface for every period elapsed; the schedule starts on the first call.
    pub fn advance(&mut self, now: Instant) -> bool {
        let ticker = self
            .ticker
            .get_or_insert_with(|| Ticker::new(Duration::from_millis(rain::TICK_MS), now));
        let steps = ticker.poll(now, MAX_CATCH_UP);
        for _ in 0..steps {
            self.surface.tick();
        }
        steps > 0
    }
}

#[derive(Debug)]
pub struct SnakeRunner {
    pub session: SessionId,
    pub game: SnakeGame,
    ticker: Option<Ticker>,
}

impl SnakeRunner {
    pub fn new(session: SessionId, game: SnakeGame) -> Self {
        Self {
            session,
            game,
            ticker: None,
        }
    }

    pub fn advance(&mut self, now: Instant) -> bool {
        let ticker = self
            .ticker
            .get_or_insert_with(|| Ticker::new(Duration::from_millis(snake::TICK_MS), now));
        let steps = ticker.poll(now, MAX_CATCH_UP);
        let mut changed = false;
        for _ in 0..steps {
            if self.game.is_paused() || self.game.is_game_over() {
                break;
            }
            self.game.tick();
            changed = true;
        }
        changed
    }
}

#[derive(Debug)]
pub struct AppState {
    pub sessions: SessionRegistry,
    pub layout: LayoutTree,
    pub active: SessionId,
    pub theme: ThemeName,
    pub modal: Option<Modal>,
    pub rain: Option<RainRunner>,
    pub snake: Option<SnakeRunner>,
    /// Last inner size reported for each pane, in terminal cells.
    pub pane_sizes: FxHashMap<SessionId, (u16, u16)>,
    /// Seed for new snake games; `None` draws from the OS.
    pub snake_seed: Option<u64>,
}

impl AppState {
    pub fn new(theme: ThemeName) -> Self {
        Self {
            sessions: SessionRegistry::new(content::welcome(theme)),
            layout: LayoutTree::new(),
            active: SessionId::main(),
            theme,
            modal: None,
            rain: None,
            snake: None,
            pane_sizes: FxHashMap::default(),
            snake_seed: None,
        }
    }

    pub fn welcome(&self) -> RichText {
        content::welcome(self.theme)
    }

    pub fn active_session(&self) -> Option<&Session> {
        self.sessions.get(&self.active)
    }

    pub fn pane_size(&self, id: &SessionId) -> (u16, u16) {
        self.pane_sizes.get(id).copied().unwrap_or((80, 24))
    }

    /// Entries of the pane menu; "Close Split" is left out while only one pane exists.
    pub fn pane_menu_items(&self) -> &'static [PaneMenuItem] {
        if self.layout.leaves().len() > 1 {
            &PANE_MENU
        } else {
            &PANE_MENU[..2]
        }
    }

    /// Number of selectable rows in the open modal, if it has any.
    pub fn modal_len(&self) -> Option<usize> {
        match self.modal.as_ref()? {
            Modal::Themes { .. } => Some(ThemeName::ALL.len()),
            Modal::PaneMenu { .. } => Some(self.pane_menu_items().len()),
            Modal::Projects | Modal::Skills => None,
        }
    }

    pub fn new_snake_game(&self) -> SnakeGame {
        match self.snake_seed {
            Some(seed) => SnakeGame::with_seed(seed),
            None => SnakeGame::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ThemeName::default())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
