use super::util::{bordered_row, rect_contains};
use super::Workbench;
use crate::kernel::fx::snake::{Heading, SnakeKey};
use crate::kernel::{Action as KernelAction, Modal, SplitDirection};
use crate::tui::{EventResult, InputEvent, Key};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

pub(super) fn handle_input(workbench: &mut Workbench, event: &InputEvent) -> EventResult {
    match event {
        InputEvent::Key(_) => match event.as_key_press() {
            Some(key) => handle_key(workbench, key),
            None => EventResult::Ignored,
        },
        InputEvent::Mouse(mouse) => handle_mouse(workbench, mouse),
        InputEvent::Paste(text) => handle_paste(workbench, text),
        InputEvent::Resize(..) => EventResult::Consumed,
        InputEvent::FocusGained | InputEvent::FocusLost => EventResult::Ignored,
    }
}

fn handle_key(workbench: &mut Workbench, event: &KeyEvent) -> EventResult {
    let key = Key::from(event);

    if key == Key::ctrl('q') || key == Key::ctrl('c') {
        workbench.dispatch_kernel(KernelAction::Quit);
        return EventResult::Quit;
    }

    if workbench.store.state().modal.is_some() {
        if let Some(action) = modal_action(key) {
            workbench.dispatch_kernel(action);
        }
        return EventResult::Consumed;
    }

    if let Some(action) = global_action(key) {
        workbench.dispatch_kernel(action);
        return EventResult::Consumed;
    }

    if let Some(snake_key) = snake_key(workbench, key) {
        workbench.dispatch_kernel(KernelAction::Snake(snake_key));
        return EventResult::Consumed;
    }

    match edit_action(event) {
        Some(action) => {
            workbench.dispatch_kernel(action);
            EventResult::Consumed
        }
        None => EventResult::Ignored,
    }
}

fn global_action(key: Key) -> Option<KernelAction> {
    let action = if key == Key::ctrl_shift('h') || key == Key::alt('h') {
        KernelAction::Split(SplitDirection::Horizontal)
    } else if key == Key::ctrl_shift('v') || key == Key::alt('v') {
        KernelAction::Split(SplitDirection::Vertical)
    } else if key == Key::ctrl_shift('w') || key == Key::alt('w') {
        KernelAction::CloseActive
    } else if key == Key::ctrl('l') {
        KernelAction::ClearActive
    } else if key == Key::ctrl('t') {
        KernelAction::OpenThemePicker
    } else {
        return None;
    };
    Some(action)
}

fn modal_action(key: Key) -> Option<KernelAction> {
    if !key.modifiers.is_empty() {
        return None;
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(KernelAction::ModalClose),
        KeyCode::Up | KeyCode::Left => Some(KernelAction::ModalMove(-1)),
        KeyCode::Down | KeyCode::Right => Some(KernelAction::ModalMove(1)),
        KeyCode::Enter => Some(KernelAction::ModalConfirm),
        _ => None,
    }
}

/// Game keys apply only in the pane hosting the game. `P` and `Space` are game keys only
/// while the prompt is empty, so commands such as `help` can still be typed.
fn snake_key(workbench: &Workbench, key: Key) -> Option<SnakeKey> {
    let state = workbench.store.state();
    let runner = state.snake.as_ref()?;
    if runner.session != state.active {
        return None;
    }
    let prompt_empty = state
        .active_session()
        .map_or(true, |session| session.input.is_empty());

    let plain = key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT;
    if !plain {
        return None;
    }
    match key.code {
        KeyCode::Up => Some(SnakeKey::Turn(Heading::Up)),
        KeyCode::Down => Some(SnakeKey::Turn(Heading::Down)),
        KeyCode::Left => Some(SnakeKey::Turn(Heading::Left)),
        KeyCode::Right => Some(SnakeKey::Turn(Heading::Right)),
        KeyCode::Esc => Some(SnakeKey::Exit),
        KeyCode::Char('p') if prompt_empty => Some(SnakeKey::TogglePause),
        KeyCode::Char(' ') if prompt_empty => Some(SnakeKey::Restart),
        _ => None,
    }
}

fn edit_action(event: &KeyEvent) -> Option<KernelAction> {
    let modifiers = event.modifiers.difference(KeyModifiers::SHIFT);
    if !modifiers.is_empty() {
        return None;
    }
    match event.code {
        KeyCode::Enter => Some(KernelAction::Submit),
        KeyCode::Up => Some(KernelAction::HistoryUp),
        KeyCode::Down => Some(KernelAction::HistoryDown),
        KeyCode::Tab => Some(KernelAction::Complete),
        KeyCode::Backspace => Some(KernelAction::InputBackspace),
        KeyCode::Char(ch) => Some(KernelAction::InputChar(ch)),
        _ => None,
    }
}

/// Left click focuses a pane, right click opens its menu. While a modal is open, a click
/// outside it closes it and a left click on a pane menu row runs that entry.
fn handle_mouse(workbench: &mut Workbench, event: &MouseEvent) -> EventResult {
    let button = match event.kind {
        MouseEventKind::Down(button @ (MouseButton::Left | MouseButton::Right)) => button,
        _ => return EventResult::Ignored,
    };
    let (x, y) = (event.column, event.row);

    let open_modal = workbench
        .store
        .state()
        .modal
        .as_ref()
        .map(|modal| matches!(modal, Modal::PaneMenu { .. }));
    if let Some(is_pane_menu) = open_modal {
        match workbench.modal_area.filter(|area| rect_contains(*area, x, y)) {
            Some(area) => {
                let entries = workbench.store.state().modal_len().unwrap_or(0);
                let row = bordered_row(area, y).filter(|row| *row < entries);
                if let (true, MouseButton::Left, Some(row)) = (is_pane_menu, button, row) {
                    workbench.dispatch_kernel(KernelAction::ModalSelect(row));
                    workbench.dispatch_kernel(KernelAction::ModalConfirm);
                }
            }
            None => {
                workbench.dispatch_kernel(KernelAction::ModalClose);
            }
        }
        return EventResult::Consumed;
    }

    let hit = workbench
        .pane_areas
        .iter()
        .find(|(_, area)| rect_contains(*area, x, y))
        .map(|(id, _)| id.clone());
    let Some(id) = hit else {
        return EventResult::Ignored;
    };
    match button {
        MouseButton::Right => {
            workbench.dispatch_kernel(KernelAction::OpenPaneMenu {
                session: id,
                anchor: (x, y),
            });
        }
        _ => {
            if id != workbench.store.state().active {
                workbench.dispatch_kernel(KernelAction::Focus(id));
            }
        }
    }
    EventResult::Consumed
}

/// Pasted text is typed into the active prompt; each line break submits.
fn handle_paste(workbench: &mut Workbench, text: &str) -> EventResult {
    if workbench.store.state().modal.is_some() {
        return EventResult::Ignored;
    }
    for ch in text.replace("\r\n", "\n").chars() {
        let action = match ch {
            '\n' | '\r' => KernelAction::Submit,
            ch if ch.is_control() => continue,
            ch => KernelAction::InputChar(ch),
        };
        workbench.dispatch_kernel(action);
    }
    EventResult::Consumed
}
