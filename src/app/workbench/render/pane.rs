use super::super::Workbench;
use super::effects;
use crate::app::theme::UiTheme;
use crate::kernel::content;
use crate::kernel::{EntryKind, OutputEntry, SessionId};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub(super) struct DrawnPane {
    /// Region showing the session log; effect surfaces are sized to it.
    pub output: Rect,
    pub cursor: Option<(u16, u16)>,
}

pub(super) fn render_pane(
    workbench: &Workbench,
    frame: &mut Frame,
    id: &SessionId,
    area: Rect,
) -> Option<DrawnPane> {
    let state = workbench.store.state();
    let session = state.sessions.get(id)?;
    let theme = &workbench.theme;
    let active = *id == state.active;

    let (border_style, border_type) = if active {
        (Style::default().fg(theme.accent), BorderType::Thick)
    } else {
        (Style::default().fg(theme.inactive_border), BorderType::Plain)
    };
    let title = if id.is_main() {
        format!(" {} ", content::TITLE)
    } else {
        format!(" {} [{}] ", content::TITLE, id)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .title(Span::styled(title, border_style.add_modifier(Modifier::BOLD)));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return None;
    }

    let snake = state.snake.as_ref().filter(|runner| runner.session == *id);
    let game_height = if snake.is_some() {
        effects::SNAKE_PANEL_HEIGHT.min(inner.height.saturating_sub(1))
    } else {
        0
    };
    let [output_area, game_area, input_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(game_height),
        Constraint::Length(1),
    ])
    .areas(inner);

    let lines = tail_lines(&session.outputs, theme, output_area.width, output_area.height);
    frame.render_widget(Paragraph::new(lines), output_area);

    if let Some(rain) = state.rain.as_ref().filter(|runner| runner.session == *id) {
        effects::render_rain(frame, output_area, &rain.surface, theme);
    }
    if let Some(snake) = snake {
        effects::render_snake(frame, game_area, &snake.game, theme);
    }

    let cursor = render_prompt(frame, input_area, &session.input, theme);
    Some(DrawnPane {
        output: output_area,
        cursor: active.then_some(cursor),
    })
}

/// Draws `➜ input`, scrolled so the end of the input stays visible. Returns the cursor cell.
fn render_prompt(frame: &mut Frame, area: Rect, input: &str, theme: &UiTheme) -> (u16, u16) {
    let prompt = format!("{} ", content::PROMPT);
    let prompt_width = prompt.width() as u16;
    let room = area.width.saturating_sub(prompt_width + 1) as usize;

    let mut shown = input;
    while shown.width() > room {
        let mut chars = shown.chars();
        chars.next();
        shown = chars.as_str();
    }

    let line = Line::from(vec![
        Span::styled(
            prompt,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(shown.to_string(), Style::default().fg(theme.text_fg)),
    ]);
    frame.render_widget(Paragraph::new(line), area);

    let x = area.x + prompt_width + shown.width() as u16;
    (x.min(area.right().saturating_sub(1)), area.y)
}

fn entry_style(kind: EntryKind, theme: &UiTheme) -> Style {
    match kind {
        EntryKind::Command => Style::default().fg(theme.text_fg),
        EntryKind::Output => Style::default(),
        EntryKind::Error => Style::default().fg(theme.error_fg),
        EntryKind::Info => Style::default().fg(theme.info_fg),
    }
}

/// The last `height` wrapped rows of the log; the view is pinned to the newest output.
fn tail_lines(
    entries: &[OutputEntry],
    theme: &UiTheme,
    width: u16,
    height: u16,
) -> Vec<Line<'static>> {
    let height = height as usize;
    let mut rows: Vec<Line<'static>> = Vec::new();
    for entry in entries.iter().rev() {
        let base = entry_style(entry.kind, theme);
        let mut entry_rows: Vec<Line<'static>> = Vec::new();
        for line in entry.content.lines() {
            let spans: Vec<(&str, Style)> = line
                .iter()
                .map(|span| (span.text.as_str(), base.patch(theme.style(span.style))))
                .collect();
            entry_rows.extend(wrap_spans(&spans, width as usize));
        }
        entry_rows.extend(rows);
        rows = entry_rows;
        if rows.len() >= height {
            break;
        }
    }
    let skip = rows.len().saturating_sub(height);
    rows.into_iter().skip(skip).collect()
}

/// Breaks styled runs into rows at most `width` cells wide. Never returns an empty vec.
fn wrap_spans(spans: &[(&str, Style)], width: usize) -> Vec<Line<'static>> {
    let mut rows = Vec::new();
    let mut row: Vec<Span<'static>> = Vec::new();
    let mut col = 0usize;

    for (text, style) in spans {
        let mut chunk = String::new();
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0);
            if width > 0 && col + w > width && col > 0 {
                if !chunk.is_empty() {
                    row.push(Span::styled(std::mem::take(&mut chunk), *style));
                }
                rows.push(Line::from(std::mem::take(&mut row)));
                col = 0;
            }
            chunk.push(ch);
            col += w;
        }
        if !chunk.is_empty() {
            row.push(Span::styled(chunk, *style));
        }
    }
    rows.push(Line::from(row));
    rows
}
