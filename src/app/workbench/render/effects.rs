use super::super::util::centered_rect;
use crate::app::theme::UiTheme;
use crate::kernel::fx::rain::CELL_WIDTH;
use crate::kernel::fx::{RainSurface, SnakeGame, GRID_HEIGHT, GRID_WIDTH};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const RAIN_HINT: &str = "Type 'stop-matrix' to exit";
const SNAKE_HELP: [&str; 2] = [
    "Snake Game: Use arrow keys to move.",
    "Press P to pause, SPACE to restart, ESC to exit.",
];
/// Terminal columns per snake cell.
const SNAKE_CELL_WIDTH: u16 = 2;
const BOARD_WIDTH: u16 = GRID_WIDTH as u16 * SNAKE_CELL_WIDTH + 2;
const BOARD_HEIGHT: u16 = GRID_HEIGHT as u16 + 2;
/// Help lines, score line and the bordered board.
pub(super) const SNAKE_PANEL_HEIGHT: u16 = SNAKE_HELP.len() as u16 + 1 + BOARD_HEIGHT;

pub(super) fn render_rain(frame: &mut Frame, area: Rect, surface: &RainSurface, theme: &UiTheme) {
    frame.render_widget(Clear, area);
    let buf = frame.buffer_mut();
    for row in 0..surface.rows().min(area.height) {
        for col in 0..surface.cols() {
            let x = area.x + col * CELL_WIDTH;
            if x >= area.right() {
                break;
            }
            if let Some(cell) = surface.cell(col, row) {
                let style = Style::default().fg(theme.rain_color(cell.brightness));
                buf.set_string(x, area.y + row, cell.glyph.to_string(), style);
            }
        }
    }

    if area.height > 0 && area.width as usize >= RAIN_HINT.len() {
        let x = area.right() - RAIN_HINT.len() as u16;
        let y = area.bottom() - 1;
        buf.set_string(x, y, RAIN_HINT, Style::default().fg(theme.muted_fg));
    }
}

pub(super) fn render_snake(frame: &mut Frame, area: Rect, game: &SnakeGame, theme: &UiTheme) {
    if area.height == 0 {
        return;
    }
    let mut lines: Vec<Line> = SNAKE_HELP
        .iter()
        .map(|text| Line::styled(*text, Style::default().fg(theme.muted_fg)))
        .collect();
    lines.push(Line::styled(
        format!("Score: {}", game.score()),
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    ));
    let header_height = (lines.len() as u16).min(area.height);
    frame.render_widget(
        Paragraph::new(lines),
        Rect::new(area.x, area.y, area.width, header_height),
    );

    let board = Rect::new(
        area.x,
        area.y + header_height,
        BOARD_WIDTH.min(area.width),
        BOARD_HEIGHT.min(area.height - header_height),
    );
    if board.height == 0 || board.width == 0 {
        return;
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.inactive_border));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    if game.is_game_over() {
        frame.render_widget(Clear, inner);
        render_overlay(
            frame,
            inner,
            vec![
                Line::styled(
                    "Game Over!",
                    Style::default()
                        .fg(theme.error_fg)
                        .add_modifier(Modifier::BOLD),
                ),
                Line::styled(
                    format!("Score: {}", game.score()),
                    Style::default().fg(theme.text_fg),
                ),
                Line::styled("Press SPACE to restart", Style::default().fg(theme.text_fg)),
            ],
        );
        return;
    }

    let buf = frame.buffer_mut();
    let mut put = |x: i32, y: i32, glyph: &str, style: Style| {
        let col = x as u16 * SNAKE_CELL_WIDTH;
        let row = y as u16;
        if col + SNAKE_CELL_WIDTH <= inner.width && row < inner.height {
            buf.set_string(inner.x + col, inner.y + row, glyph, style);
        }
    };
    if let Some(food) = game.food() {
        put(food.x, food.y, "● ", Style::default().fg(theme.food));
    }
    for (i, cell) in game.body().enumerate() {
        let color = if i == 0 {
            theme.snake_head
        } else {
            theme.snake_body
        };
        put(cell.x, cell.y, "██", Style::default().fg(color));
    }

    if game.is_paused() {
        render_overlay(
            frame,
            inner,
            vec![
                Line::styled(
                    "PAUSED",
                    Style::default()
                        .fg(theme.text_fg)
                        .add_modifier(Modifier::BOLD),
                ),
                Line::styled("Press P to resume", Style::default().fg(theme.text_fg)),
            ],
        );
    }
}

fn render_overlay(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
    let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16 + 4;
    let height = lines.len() as u16;
    let target = centered_rect(width, height, area);
    frame.render_widget(Clear, target);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), target);
}
