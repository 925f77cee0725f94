use super::*;
use crate::kernel::fx::{Heading, SnakeKey};
use crate::kernel::layout::{LayoutNode, LayoutShape};
use crate::kernel::services::ports::WeatherReport;
use crate::kernel::session::EntryKind;
use std::time::{Duration, Instant};

fn new_store() -> Store {
    Store::new(AppState::new(ThemeName::Default))
}

fn main_id() -> SessionId {
    SessionId::main()
}

fn last_entry(store: &Store, id: &SessionId) -> (EntryKind, String) {
    let session = store.state().sessions.get(id).unwrap();
    let entry = session.outputs.last().unwrap();
    (entry.kind, entry.content.to_plain_string())
}

fn type_line(store: &mut Store, line: &str) {
    for ch in line.chars() {
        store.dispatch(Action::InputChar(ch));
    }
}

#[test]
fn echo_precedes_result() {
    let mut store = new_store();
    store.execute(&main_id(), "calc 2 + 2*3");
    let session = store.state().sessions.get(&main_id()).unwrap();
    let n = session.outputs.len();
    assert_eq!(session.outputs[n - 2].kind, EntryKind::Command);
    assert_eq!(
        session.outputs[n - 2].content.to_plain_string(),
        "➜ calc 2 + 2*3"
    );
    assert_eq!(session.outputs[n - 1].kind, EntryKind::Output);
    assert!(session.outputs[n - 1]
        .content
        .to_plain_string()
        .ends_with("= 8"));
}

#[test]
fn division_by_zero_is_an_error_entry() {
    let mut store = new_store();
    store.execute(&main_id(), "calc 10/0");
    assert_eq!(
        last_entry(&store, &main_id()),
        (EntryKind::Error, CALC_FAILED.to_string())
    );
}

#[test]
fn calc_without_expression_shows_usage() {
    let mut store = new_store();
    store.execute(&main_id(), "calculate");
    assert_eq!(
        last_entry(&store, &main_id()),
        (EntryKind::Error, CALC_USAGE.to_string())
    );
}

#[test]
fn unknown_command_reports_lowercased_line() {
    let mut store = new_store();
    store.execute(&main_id(), "Sudo rm");
    assert_eq!(
        last_entry(&store, &main_id()),
        (
            EntryKind::Error,
            "Command not found: sudo rm. Type 'help' for available commands.".to_string()
        )
    );
}

#[test]
fn blank_line_echoes_without_history() {
    let mut store = new_store();
    store.execute(&main_id(), "   ");
    let session = store.state().sessions.get(&main_id()).unwrap();
    assert_eq!(session.outputs.len(), 2);
    assert!(session.history.is_empty());
}

#[test]
fn submit_records_history_and_clears_input() {
    let mut store = new_store();
    type_line(&mut store, "help");
    store.dispatch(Action::Submit);
    let session = store.state().sessions.get(&main_id()).unwrap();
    assert_eq!(session.history, vec!["help".to_string()]);
    assert_eq!(session.history_cursor, None);
    assert!(session.input.is_empty());
}

#[test]
fn history_navigation_round_trip() {
    let mut store = new_store();
    store.execute(&main_id(), "about");
    store.execute(&main_id(), "skills");
    type_line(&mut store, "draft");

    store.dispatch(Action::HistoryUp);
    assert_eq!(store.state().active_session().unwrap().input, "skills");
    store.dispatch(Action::HistoryUp);
    store.dispatch(Action::HistoryUp);
    assert_eq!(store.state().active_session().unwrap().input, "about");
    store.dispatch(Action::HistoryDown);
    assert_eq!(store.state().active_session().unwrap().input, "skills");
    store.dispatch(Action::HistoryDown);
    assert_eq!(store.state().active_session().unwrap().input, "");
    let result = store.dispatch(Action::HistoryDown);
    assert!(!result.state_changed);
}

#[test]
fn clear_leaves_only_welcome_and_is_idempotent() {
    let mut store = new_store();
    store.execute(&main_id(), "help");
    store.execute(&main_id(), "clear");
    assert_eq!(store.state().active_session().unwrap().outputs.len(), 1);
    store.dispatch(Action::ClearActive);
    let session = store.state().active_session().unwrap();
    assert_eq!(session.outputs.len(), 1);
    assert!(session.shows_only_welcome());
}

#[test]
fn tab_with_unique_prefix_replaces_input() {
    let mut store = new_store();
    type_line(&mut store, "hel");
    store.dispatch(Action::Complete);
    assert_eq!(store.state().active_session().unwrap().input, "help");
}

#[test]
fn tab_completion_only_touches_the_prompt() {
    let mut store = new_store();
    store.execute(&main_id(), "help");
    let outputs_before = store.state().active_session().unwrap().outputs.len();
    type_line(&mut store, "abo");

    assert!(store.dispatch(Action::Complete).state_changed);

    let session = store.state().active_session().unwrap();
    assert_eq!(session.input, "about");
    assert_eq!(session.history, vec!["help".to_string()]);
    assert_eq!(session.history_cursor, None);
    assert_eq!(session.outputs.len(), outputs_before);
}

#[test]
fn tab_with_many_matches_lists_them() {
    let mut store = new_store();
    type_line(&mut store, "ex");
    store.dispatch(Action::Complete);
    let (kind, text) = last_entry(&store, &main_id());
    assert_eq!(kind, EntryKind::Info);
    assert_eq!(text, "\nPossible commands:\nexperience  exit-game");
    assert_eq!(store.state().active_session().unwrap().input, "ex");
}

#[test]
fn split_then_close_restores_single_pane() {
    let mut store = new_store();
    store.dispatch(Action::Split(SplitDirection::Horizontal));
    let state = store.state();
    assert_eq!(state.sessions.len(), 2);
    let new_id = state.active.clone();
    assert_ne!(new_id, main_id());
    assert_eq!(
        state.layout.shape(),
        LayoutShape::Split(
            SplitDirection::Horizontal,
            vec![LayoutShape::Leaf(main_id()), LayoutShape::Leaf(new_id.clone())]
        )
    );

    store.dispatch(Action::CloseActive);
    let state = store.state();
    assert_eq!(state.layout.shape(), LayoutShape::Leaf(main_id()));
    assert_eq!(state.sessions.len(), 1);
    assert_eq!(state.active, main_id());
    assert!(!state.sessions.contains(&new_id));
}

#[test]
fn closing_last_pane_is_a_no_op() {
    let mut store = new_store();
    let result = store.dispatch(Action::CloseActive);
    assert!(!result.state_changed);
    store.execute(&main_id(), "close");
    assert_eq!(store.state().sessions.len(), 1);
    assert!(store.state().layout.is_single_leaf());
}

#[test]
fn split_commands_focus_new_pane() {
    let mut store = new_store();
    store.execute(&main_id(), "vsplit");
    let second = store.state().active.clone();
    assert_eq!(
        store.state().layout.shape(),
        LayoutShape::Split(
            SplitDirection::Vertical,
            vec![LayoutShape::Leaf(main_id()), LayoutShape::Leaf(second.clone())]
        )
    );
    store.execute(&second, "split");
    assert_eq!(store.state().sessions.len(), 3);
    assert_ne!(store.state().active, second);
}

#[test]
fn focus_ignores_unknown_sessions() {
    let mut store = new_store();
    store.dispatch(Action::Split(SplitDirection::Horizontal));
    assert!(store.dispatch(Action::Focus(main_id())).state_changed);
    assert_eq!(store.state().active, main_id());
    let result = store.dispatch(Action::Focus(SessionId::new("ghost")));
    assert!(!result.state_changed);
    assert_eq!(store.state().active, main_id());
}

#[test]
fn closing_inactive_pane_keeps_focus() {
    let mut store = new_store();
    store.dispatch(Action::Split(SplitDirection::Horizontal));
    let other = store.state().active.clone();
    store.dispatch(Action::Focus(main_id()));
    store.execute(&other, "close");
    assert_eq!(store.state().active, main_id());
}

#[test]
fn matrix_start_stop() {
    let mut store = new_store();
    store.dispatch(Action::PaneResized {
        session: main_id(),
        width: 40,
        height: 10,
    });
    store.execute(&main_id(), "matrix");
    let rain = store.state().rain.as_ref().unwrap();
    assert_eq!(rain.session, main_id());
    assert_eq!(rain.surface.cols(), 20);
    assert_eq!(
        last_entry(&store, &main_id()),
        (EntryKind::Info, MATRIX_STARTED.to_string())
    );

    store.execute(&main_id(), "stop-matrix");
    assert!(store.state().rain.is_none());
    assert_eq!(
        last_entry(&store, &main_id()),
        (EntryKind::Info, MATRIX_STOPPED.to_string())
    );
}

#[test]
fn matrix_twice_keeps_a_single_runner() {
    let mut store = new_store();
    store.execute(&main_id(), "matrix");
    store.dispatch(Action::Split(SplitDirection::Horizontal));
    let other = store.state().active.clone();
    store.execute(&other, "matrix");
    assert_eq!(store.state().rain.as_ref().unwrap().session, other);
}

#[test]
fn rain_advances_on_ticks() {
    let mut store = new_store();
    store.execute(&main_id(), "matrix");
    let start = Instant::now();
    assert!(!store.dispatch(Action::Tick { now: start }).state_changed);
    let before = store.state().rain.as_ref().unwrap().surface.drops().to_vec();
    let result = store.dispatch(Action::Tick {
        now: start + Duration::from_millis(50),
    });
    assert!(result.state_changed);
    let after = store.state().rain.as_ref().unwrap().surface.drops();
    assert_ne!(before.as_slice(), after);
}

#[test]
fn closing_pane_stops_its_runners() {
    let mut store = new_store();
    store.dispatch(Action::Split(SplitDirection::Vertical));
    let other = store.state().active.clone();
    store.execute(&other, "matrix");
    store.execute(&other, "game");
    assert!(store.state().rain.is_some());
    assert!(store.state().snake.is_some());
    store.dispatch(Action::CloseActive);
    assert!(store.state().rain.is_none());
    assert!(store.state().snake.is_none());
}

#[test]
fn snake_ticks_and_exits_on_escape() {
    let mut state = AppState::new(ThemeName::Default);
    state.snake_seed = Some(11);
    let mut store = Store::new(state);
    store.execute(&main_id(), "game");

    let start = Instant::now();
    store.dispatch(Action::Tick { now: start });
    let head = store.state().snake.as_ref().unwrap().game.head();
    store.dispatch(Action::Snake(SnakeKey::Turn(Heading::Down)));
    store.dispatch(Action::Tick {
        now: start + Duration::from_millis(100),
    });
    let moved = store.state().snake.as_ref().unwrap().game.head();
    assert_eq!(moved, head.step(Heading::Down));

    store.dispatch(Action::Snake(SnakeKey::Exit));
    assert!(store.state().snake.is_none());
    assert_eq!(
        last_entry(&store, &main_id()),
        (EntryKind::Info, GAME_EXITED.to_string())
    );
}

#[test]
fn exit_game_always_reports() {
    let mut store = new_store();
    store.execute(&main_id(), "exit-game");
    assert_eq!(
        last_entry(&store, &main_id()),
        (EntryKind::Info, GAME_EXITED.to_string())
    );
}

#[test]
fn modals_open_and_close() {
    let mut store = new_store();
    store.execute(&main_id(), "projects");
    assert_eq!(store.state().modal, Some(Modal::Projects));
    store.dispatch(Action::ModalClose);
    assert_eq!(store.state().modal, None);
    store.execute(&main_id(), "skills-visual");
    assert_eq!(store.state().modal, Some(Modal::Skills));
}

#[test]
fn theme_picker_selects_and_persists() {
    let mut store = new_store();
    store.dispatch(Action::OpenThemePicker);
    assert_eq!(store.state().modal, Some(Modal::Themes { selected: 0 }));
    store.dispatch(Action::ModalMove(-1));
    assert_eq!(store.state().modal, Some(Modal::Themes { selected: 3 }));
    let result = store.dispatch(Action::ModalConfirm);
    assert_eq!(result.effects, vec![Effect::PersistTheme(ThemeName::Nord)]);
    assert_eq!(store.state().theme, ThemeName::Nord);
    assert_eq!(store.state().modal, None);
}

#[test]
fn pane_menu_acts_on_clicked_pane_not_active_one() {
    let mut store = new_store();
    store.dispatch(Action::Split(SplitDirection::Horizontal));
    let other = store.state().active.clone();

    store.dispatch(Action::OpenPaneMenu {
        session: main_id(),
        anchor: (3, 4),
    });
    assert_eq!(store.state().pane_menu_items().len(), 3);
    store.dispatch(Action::ModalSelect(2));
    store.dispatch(Action::ModalConfirm);

    assert_eq!(store.state().modal, None);
    assert!(!store.state().sessions.contains(&main_id()));
    assert_eq!(store.state().layout.leaves(), vec![&other]);
    assert_eq!(store.state().active, other);
}

#[test]
fn pane_menu_hides_close_on_last_pane() {
    let mut store = new_store();
    store.dispatch(Action::OpenPaneMenu {
        session: main_id(),
        anchor: (0, 0),
    });
    assert_eq!(
        store.state().pane_menu_items(),
        &[PaneMenuItem::SplitHorizontal, PaneMenuItem::SplitVertical]
    );
    assert!(!store.dispatch(Action::ModalSelect(2)).state_changed);

    store.dispatch(Action::ModalMove(-1));
    store.dispatch(Action::ModalConfirm);
    assert_eq!(store.state().sessions.len(), 2);
    assert!(matches!(
        store.state().layout.root(),
        LayoutNode::Split(split) if split.direction == SplitDirection::Vertical
    ));
}

#[test]
fn pane_menu_ignores_unknown_pane() {
    let mut store = new_store();
    let result = store.dispatch(Action::OpenPaneMenu {
        session: SessionId::new("terminal-9"),
        anchor: (0, 0),
    });
    assert!(!result.state_changed);
    assert_eq!(store.state().modal, None);
}

#[test]
fn theme_change_regenerates_untouched_welcome_only() {
    let mut store = new_store();
    store.dispatch(Action::Split(SplitDirection::Horizontal));
    let fresh = store.state().active.clone();
    store.execute(&main_id(), "help");

    let main_before = store.state().sessions.get(&main_id()).unwrap().outputs[0].clone();
    store.dispatch(Action::SetTheme(ThemeName::Dracula));

    let fresh_session = store.state().sessions.get(&fresh).unwrap();
    assert_eq!(fresh_session.outputs.len(), 1);
    assert_eq!(
        fresh_session.outputs[0].content,
        content::welcome(ThemeName::Dracula)
    );
    let main_after = &store.state().sessions.get(&main_id()).unwrap().outputs[0];
    assert_eq!(main_after, &main_before);
}

#[test]
fn theme_command_lists_sets_and_rejects() {
    let mut store = new_store();
    store.execute(&main_id(), "theme");
    let (_, listing) = last_entry(&store, &main_id());
    assert!(listing.contains("solarized"));

    let result = store.execute(&main_id(), "theme Solarized");
    assert_eq!(result.effects, vec![Effect::PersistTheme(ThemeName::Solarized)]);
    assert_eq!(store.state().theme, ThemeName::Solarized);

    store.execute(&main_id(), "theme neon");
    let (kind, text) = last_entry(&store, &main_id());
    assert_eq!(kind, EntryKind::Error);
    assert!(text.starts_with("Unknown theme: neon."));
}

#[test]
fn weather_requests_fetch_effect() {
    let mut store = new_store();
    let result = store.execute(&main_id(), "weather New York");
    assert_eq!(
        result.effects,
        vec![Effect::FetchWeather {
            session: main_id(),
            location: "new york".to_string()
        }]
    );
    assert_eq!(
        last_entry(&store, &main_id()),
        (EntryKind::Info, "Fetching weather for new york...".to_string())
    );

    let result = store.execute(&main_id(), "weather");
    assert!(result.effects.is_empty());
    assert_eq!(
        last_entry(&store, &main_id()),
        (EntryKind::Error, WEATHER_USAGE.to_string())
    );
}

#[test]
fn weather_reply_lands_in_its_session() {
    let mut store = new_store();
    let report = WeatherReport {
        location: "Paris".to_string(),
        country: "FR".to_string(),
        temperature_c: 18,
        feels_like_c: 17,
        humidity: 60,
        condition: "Clouds".to_string(),
        wind_kmh: 12,
    };
    store.dispatch(Action::WeatherLoaded {
        session: main_id(),
        report: report.clone(),
    });
    let (kind, text) = last_entry(&store, &main_id());
    assert_eq!(kind, EntryKind::Output);
    assert!(text.contains("Paris, FR"));
    assert!(text.contains("12 km/h"));

    store.dispatch(Action::WeatherFailed { session: main_id() });
    assert_eq!(
        last_entry(&store, &main_id()),
        (EntryKind::Error, WEATHER_FAILED.to_string())
    );

    let result = store.dispatch(Action::WeatherLoaded {
        session: SessionId::new("terminal-99"),
        report,
    });
    assert!(!result.state_changed);
}

#[test]
fn quit_drops_runners() {
    let mut store = new_store();
    store.execute(&main_id(), "matrix");
    let result = store.dispatch(Action::Quit);
    assert_eq!(result.effects, vec![Effect::Quit]);
    assert!(store.state().rain.is_none());
}
