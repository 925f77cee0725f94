use super::calc;
use super::command::{self, Command, Completion, Parsed};
use super::content;
use super::fx::snake::KeyOutcome;
use super::layout::SplitDirection;
use super::session::{OutputEntry, SessionId, SessionPatch};
use super::state::{Modal, PaneMenuItem, RainRunner, SnakeRunner};
use super::theme::ThemeName;
use super::{Action, AppState, Effect};

pub const CALC_USAGE: &str = "Please enter a mathematical expression. Usage: calc [expression]";
pub const CALC_FAILED: &str =
    "Error: Could not evaluate the expression. Make sure it's a valid mathematical expression.";
pub const WEATHER_USAGE: &str = "Please specify a location. Usage: weather [city name]";
pub const WEATHER_FAILED: &str = "Failed to fetch weather data. Please check the city name.";
pub const MATRIX_STARTED: &str = "Matrix effect started. Type \"stop-matrix\" to exit.";
pub const MATRIX_STOPPED: &str = "Matrix effect stopped.";
pub const GAME_EXITED: &str = "Game exited.";

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::InputChar(ch) => {
                let Some(session) = self.state.sessions.get_mut(&self.state.active) else {
                    return DispatchResult::unchanged();
                };
                session.input.push(ch);
                DispatchResult::changed(true)
            }
            Action::InputBackspace => {
                let Some(session) = self.state.sessions.get_mut(&self.state.active) else {
                    return DispatchResult::unchanged();
                };
                DispatchResult::changed(session.input.pop().is_some())
            }
            Action::Submit => {
                let active = self.state.active.clone();
                let Some(raw) = self.state.sessions.get(&active).map(|s| s.input.clone()) else {
                    return DispatchResult::unchanged();
                };
                self.execute(&active, &raw)
            }
            Action::HistoryUp => {
                let Some(session) = self.state.sessions.get_mut(&self.state.active) else {
                    return DispatchResult::unchanged();
                };
                DispatchResult::changed(session.history_up())
            }
            Action::HistoryDown => {
                let Some(session) = self.state.sessions.get_mut(&self.state.active) else {
                    return DispatchResult::unchanged();
                };
                DispatchResult::changed(session.history_down())
            }
            Action::Complete => self.complete(),
            Action::Focus(id) => {
                if id == self.state.active || !self.state.layout.contains(&id) {
                    return DispatchResult::unchanged();
                }
                self.state.active = id;
                DispatchResult::changed(true)
            }
            Action::Split(direction) => {
                let target = self.state.active.clone();
                DispatchResult::changed(self.split(&target, direction))
            }
            Action::CloseActive => {
                let target = self.state.active.clone();
                DispatchResult::changed(self.close(&target))
            }
            Action::ClearActive => {
                let welcome = self.state.welcome();
                self.state.sessions.clear(&self.state.active, welcome);
                DispatchResult::changed(true)
            }
            Action::SetTheme(theme) => self.set_theme(theme),
            Action::OpenThemePicker => {
                self.state.modal = Some(Modal::Themes {
                    selected: self.state.theme.index(),
                });
                DispatchResult::changed(true)
            }
            Action::OpenPaneMenu { session, anchor } => {
                if !self.state.layout.contains(&session) {
                    return DispatchResult::unchanged();
                }
                self.state.modal = Some(Modal::PaneMenu {
                    target: session,
                    anchor,
                    selected: 0,
                });
                DispatchResult::changed(true)
            }
            Action::ModalMove(delta) => {
                let Some(count) = self.state.modal_len() else {
                    return DispatchResult::unchanged();
                };
                let Some(selected) = self.state.modal.as_mut().and_then(Modal::selected_mut) else {
                    return DispatchResult::unchanged();
                };
                let prev = *selected;
                *selected = (prev as isize + delta).rem_euclid(count as isize) as usize;
                DispatchResult::changed(*selected != prev)
            }
            Action::ModalSelect(index) => {
                let Some(count) = self.state.modal_len() else {
                    return DispatchResult::unchanged();
                };
                let Some(selected) = self.state.modal.as_mut().and_then(Modal::selected_mut) else {
                    return DispatchResult::unchanged();
                };
                if index >= count || *selected == index {
                    return DispatchResult::unchanged();
                }
                *selected = index;
                DispatchResult::changed(true)
            }
            Action::ModalConfirm => match self.state.modal.take() {
                Some(Modal::Themes { selected }) => {
                    let theme = ThemeName::ALL
                        .get(selected)
                        .copied()
                        .unwrap_or_default();
                    let mut result = self.set_theme(theme);
                    result.state_changed = true;
                    result
                }
                Some(Modal::PaneMenu {
                    target, selected, ..
                }) => {
                    match self.state.pane_menu_items().get(selected) {
                        Some(PaneMenuItem::SplitHorizontal) => {
                            self.split(&target, SplitDirection::Horizontal);
                        }
                        Some(PaneMenuItem::SplitVertical) => {
                            self.split(&target, SplitDirection::Vertical);
                        }
                        Some(PaneMenuItem::Close) => {
                            self.close(&target);
                        }
                        None => {}
                    }
                    DispatchResult::changed(true)
                }
                Some(_) => DispatchResult::changed(true),
                None => DispatchResult::unchanged(),
            },
            Action::ModalClose => DispatchResult::changed(self.state.modal.take().is_some()),
            Action::Snake(key) => self.snake_key(key),
            Action::PaneResized {
                session,
                width,
                height,
            } => {
                if let Some(rain) = self.state.rain.as_mut() {
                    if rain.session == session {
                        rain.surface.resize(width, height);
                    }
                }
                let prev = self.state.pane_sizes.insert(session, (width, height));
                DispatchResult::changed(prev != Some((width, height)))
            }
            Action::WeatherLoaded { session, report } => {
                if !self.state.sessions.contains(&session) {
                    tracing::debug!(session = %session, "weather reply for closed session dropped");
                    return DispatchResult::unchanged();
                }
                self.state
                    .sessions
                    .append_output(&session, OutputEntry::output(content::weather(&report)));
                DispatchResult::changed(true)
            }
            Action::WeatherFailed { session } => {
                if !self.state.sessions.contains(&session) {
                    return DispatchResult::unchanged();
                }
                self.state
                    .sessions
                    .append_output(&session, OutputEntry::error(WEATHER_FAILED));
                DispatchResult::changed(true)
            }
            Action::Tick { now } => {
                let mut changed = false;
                if let Some(rain) = self.state.rain.as_mut() {
                    changed |= rain.advance(now);
                }
                if let Some(snake) = self.state.snake.as_mut() {
                    changed |= snake.advance(now);
                }
                DispatchResult::changed(changed)
            }
            Action::Quit => {
                self.state.rain = None;
                self.state.snake = None;
                DispatchResult {
                    effects: vec![Effect::Quit],
                    state_changed: false,
                }
            }
        }
    }

    /// Runs one submitted line in `session`: echo, history, then the command itself.
    pub fn execute(&mut self, session: &SessionId, raw: &str) -> DispatchResult {
        let Some(entry) = self.state.sessions.get_mut(session) else {
            tracing::debug!(session = %session, "execute for unknown session ignored");
            return DispatchResult::unchanged();
        };
        entry.outputs.push(OutputEntry::command(raw));
        if !raw.trim().is_empty() {
            entry.push_history(raw);
        }
        entry.input.clear();

        let effects = match command::parse(raw) {
            Parsed::Empty => Vec::new(),
            Parsed::Unknown(line) => {
                tracing::debug!(session = %session, "unknown command");
                self.state.sessions.append_output(
                    session,
                    OutputEntry::error(&format!(
                        "Command not found: {line}. Type 'help' for available commands."
                    )),
                );
                Vec::new()
            }
            Parsed::Known { command, args } => {
                tracing::debug!(session = %session, command = command.name(), "command dispatched");
                self.run_command(session, command, &args)
            }
        };

        DispatchResult {
            effects,
            state_changed: true,
        }
    }

    fn output(&mut self, session: &SessionId, entry: OutputEntry) {
        self.state.sessions.append_output(session, entry);
    }

    fn run_command(&mut self, session: &SessionId, command: Command, args: &str) -> Vec<Effect> {
        let theme = self.state.theme;
        match command {
            Command::Help => self.output(session, OutputEntry::output(content::help())),
            Command::About => self.output(session, OutputEntry::output(content::about(theme))),
            Command::Skills => self.output(session, OutputEntry::output(content::skills())),
            Command::Experience => {
                self.output(session, OutputEntry::output(content::experience()))
            }
            Command::Education => {
                self.output(session, OutputEntry::output(content::education(theme)))
            }
            Command::Contact => self.output(session, OutputEntry::output(content::contact(theme))),
            Command::Social => self.output(session, OutputEntry::output(content::social(theme))),
            Command::Cv => self.output(session, OutputEntry::output(content::cv(theme))),
            Command::Clear => {
                let welcome = self.state.welcome();
                self.state.sessions.clear(session, welcome);
            }
            Command::Projects => self.state.modal = Some(Modal::Projects),
            Command::SkillsVisual => self.state.modal = Some(Modal::Skills),
            Command::Game => {
                let game = self.state.new_snake_game();
                self.state.snake = Some(SnakeRunner::new(session.clone(), game));
                tracing::info!(session = %session, "snake started");
            }
            Command::ExitGame => {
                if self.state.snake.take().is_some() {
                    tracing::info!(session = %session, "snake stopped");
                }
                self.output(session, OutputEntry::info(GAME_EXITED));
            }
            Command::Matrix => {
                let area = self.state.pane_size(session);
                self.state.rain = Some(RainRunner::new(session.clone(), area));
                tracing::info!(session = %session, "rain started");
                self.output(session, OutputEntry::info(MATRIX_STARTED));
            }
            Command::StopMatrix => {
                if self.state.rain.take().is_some() {
                    tracing::info!(session = %session, "rain stopped");
                }
                self.output(session, OutputEntry::info(MATRIX_STOPPED));
            }
            Command::Weather => {
                if args.is_empty() {
                    self.output(session, OutputEntry::error(WEATHER_USAGE));
                    return Vec::new();
                }
                self.output(
                    session,
                    OutputEntry::info(&format!("Fetching weather for {args}...")),
                );
                return vec![Effect::FetchWeather {
                    session: session.clone(),
                    location: args.to_string(),
                }];
            }
            Command::Calc => {
                if args.is_empty() {
                    self.output(session, OutputEntry::error(CALC_USAGE));
                    return Vec::new();
                }
                match calc::evaluate(&calc::sanitize(args)) {
                    Ok(value) => {
                        let result = calc::format_result(value);
                        self.output(
                            session,
                            OutputEntry::output(content::calculation(args, &result)),
                        );
                    }
                    Err(err) => {
                        tracing::debug!(error = %err, "calc failed");
                        self.output(session, OutputEntry::error(CALC_FAILED));
                    }
                }
            }
            Command::Theme => return self.theme_command(session, args),
            Command::Split => {
                self.split(session, SplitDirection::Horizontal);
            }
            Command::VSplit => {
                self.split(session, SplitDirection::Vertical);
            }
            Command::Close => {
                self.close(session);
            }
        }
        Vec::new()
    }

    fn theme_command(&mut self, session: &SessionId, args: &str) -> Vec<Effect> {
        if args.is_empty() {
            let listing = content::themes(self.state.theme);
            self.output(session, OutputEntry::output(listing));
            return Vec::new();
        }
        match ThemeName::parse(args) {
            Some(theme) => {
                let result = self.set_theme(theme);
                self.output(
                    session,
                    OutputEntry::info(&format!("Theme set to {}.", theme.label())),
                );
                result.effects
            }
            None => {
                let names: Vec<&str> = ThemeName::ALL.iter().map(|t| t.as_str()).collect();
                self.output(
                    session,
                    OutputEntry::error(&format!(
                        "Unknown theme: {args}. Available: {}",
                        names.join(", ")
                    )),
                );
                Vec::new()
            }
        }
    }

    fn complete(&mut self) -> DispatchResult {
        let active = self.state.active.clone();
        let Some(input) = self.state.sessions.get(&active).map(|s| s.input.clone()) else {
            return DispatchResult::unchanged();
        };
        match command::complete(&input) {
            Completion::None => DispatchResult::unchanged(),
            Completion::Unique(name) => {
                self.state.sessions.update(
                    &active,
                    SessionPatch {
                        input: Some(name.to_string()),
                        ..SessionPatch::default()
                    },
                );
                DispatchResult::changed(true)
            }
            Completion::Candidates(names) => {
                self.output(
                    &active,
                    OutputEntry::info(&format!("\nPossible commands:\n{}", names.join("  "))),
                );
                DispatchResult::changed(true)
            }
        }
    }

    /// Splits `target` and focuses the new pane.
    fn split(&mut self, target: &SessionId, direction: SplitDirection) -> bool {
        let welcome = self.state.welcome();
        match self
            .state
            .layout
            .split(&mut self.state.sessions, target, direction, welcome)
        {
            Some(new_id) => {
                self.state.active = new_id;
                true
            }
            None => false,
        }
    }

    /// Closes `target`, stopping any runner bound to it. The last pane stays.
    fn close(&mut self, target: &SessionId) -> bool {
        if !self.state.layout.close(&mut self.state.sessions, target) {
            return false;
        }
        if self.state.rain.as_ref().is_some_and(|r| &r.session == target) {
            self.state.rain = None;
            tracing::info!(session = %target, "rain stopped with its pane");
        }
        if self.state.snake.as_ref().is_some_and(|s| &s.session == target) {
            self.state.snake = None;
            tracing::info!(session = %target, "snake stopped with its pane");
        }
        self.state.pane_sizes.remove(target);
        if &self.state.active == target {
            if let Some(next) = self.state.layout.first_leaf() {
                self.state.active = next.clone();
            }
        }
        true
    }

    fn set_theme(&mut self, theme: ThemeName) -> DispatchResult {
        let changed = theme != self.state.theme;
        self.state.theme = theme;
        if changed {
            let welcome = self.state.welcome();
            for session in self.state.sessions.iter_mut() {
                if session.shows_only_welcome() {
                    session.outputs[0] = OutputEntry::output(welcome.clone());
                }
            }
            tracing::info!(theme = theme.as_str(), "theme changed");
        }
        DispatchResult {
            effects: vec![Effect::PersistTheme(theme)],
            state_changed: changed,
        }
    }

    fn snake_key(&mut self, key: super::fx::SnakeKey) -> DispatchResult {
        let Some(runner) = self.state.snake.as_mut() else {
            return DispatchResult::unchanged();
        };
        match runner.game.handle_key(key) {
            KeyOutcome::Handled => DispatchResult::changed(true),
            KeyOutcome::Ignored => DispatchResult::unchanged(),
            KeyOutcome::Exit => {
                let session = runner.session.clone();
                self.state.snake = None;
                tracing::info!(session = %session, "snake stopped");
                self.output(&session, OutputEntry::info(GAME_EXITED));
                DispatchResult::changed(true)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
