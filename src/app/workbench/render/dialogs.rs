use super::super::util::{anchored_rect, centered_rect};
use super::super::Workbench;
use crate::app::theme::UiTheme;
use crate::kernel::content::{PROJECTS, SKILL_LEVELS};
use crate::kernel::{Modal, PaneMenuItem, ThemeName};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const BAR_WIDTH: usize = 20;
const SKILL_NAME_WIDTH: usize = 14;
const FOOTER: &str = "Esc to close";
const THEME_FOOTER: &str = "↑/↓ select · Enter apply · Esc close";
/// Widest label plus marker and borders.
const PANE_MENU_WIDTH: u16 = 24;

pub(super) fn render_modal(workbench: &Workbench, frame: &mut Frame, area: Rect) -> Option<Rect> {
    let state = workbench.store.state();
    let theme = &workbench.theme;
    let (title, lines, width) = match state.modal.as_ref()? {
        Modal::Projects => ("Projects", project_lines(theme), 64),
        Modal::Skills => ("Skills Visualization", skill_lines(theme), 50),
        Modal::Themes { selected } => (
            "Select Theme",
            theme_lines(theme, state.theme, *selected),
            40,
        ),
        Modal::PaneMenu {
            anchor, selected, ..
        } => {
            let lines = pane_menu_lines(theme, state.pane_menu_items(), *selected);
            let target = anchored_rect(PANE_MENU_WIDTH, lines.len() as u16 + 2, *anchor, area);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.accent));
            frame.render_widget(Clear, target);
            frame.render_widget(Paragraph::new(lines).block(block), target);
            return Some(target);
        }
    };

    let height = lines.len() as u16 + 2;
    let target = centered_rect(width, height, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent))
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ));
    frame.render_widget(Clear, target);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        target,
    );
    Some(target)
}

fn heading(text: &str, theme: &UiTheme) -> Line<'static> {
    Line::styled(
        text.to_string(),
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    )
}

fn footer(text: &'static str, theme: &UiTheme) -> [Line<'static>; 2] {
    [
        Line::default(),
        Line::styled(text, Style::default().fg(theme.muted_fg)),
    ]
}

fn project_lines(theme: &UiTheme) -> Vec<Line<'static>> {
    let label = Style::default().fg(theme.muted_fg);
    let text = Style::default().fg(theme.text_fg);
    let mut lines = Vec::new();
    for (i, project) in PROJECTS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(heading(project.title, theme));
        lines.push(Line::styled(project.description, text));
        lines.push(Line::from(vec![
            Span::styled("Tech: ", label),
            Span::styled(project.technologies.join(" · "), text),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Demo: ", label),
            Span::styled(project.demo, text.add_modifier(Modifier::UNDERLINED)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Repo: ", label),
            Span::styled(project.repo, text.add_modifier(Modifier::UNDERLINED)),
        ]));
    }
    lines.extend(footer(FOOTER, theme));
    lines
}

/// `level` percent as a fixed-width bar.
fn skill_bar(level: u8) -> (String, String) {
    let filled = (level.min(100) as usize * BAR_WIDTH + 50) / 100;
    ("█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn skill_lines(theme: &UiTheme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, category) in SKILL_LEVELS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(heading(category.name, theme));
        for (name, level) in category.skills {
            let (filled, empty) = skill_bar(*level);
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {name:<SKILL_NAME_WIDTH$}"),
                    Style::default().fg(theme.text_fg),
                ),
                Span::styled(filled, Style::default().fg(theme.accent)),
                Span::styled(empty, Style::default().fg(theme.inactive_border)),
                Span::styled(format!(" {level:>3}%"), Style::default().fg(theme.muted_fg)),
            ]));
        }
    }
    lines.extend(footer(FOOTER, theme));
    lines
}

fn pane_menu_lines(
    theme: &UiTheme,
    items: &[PaneMenuItem],
    selected: usize,
) -> Vec<Line<'static>> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            if i == selected {
                Line::styled(
                    format!("▸ {}", item.label()),
                    Style::default()
                        .fg(theme.text_fg)
                        .bg(theme.selected_bg)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Line::styled(format!("  {}", item.label()), Style::default().fg(theme.text_fg))
            }
        })
        .collect()
}

fn theme_lines(theme: &UiTheme, current: ThemeName, selected: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, name) in ThemeName::ALL.iter().enumerate() {
        let swatch = Span::styled("■ ", Style::default().fg(theme.color(name.accent())));
        let marker = if i == selected { "▸ " } else { "  " };
        let mut style = Style::default().fg(theme.text_fg);
        if i == selected {
            style = style.bg(theme.selected_bg).add_modifier(Modifier::BOLD);
        }
        let mut spans = vec![
            Span::styled(marker, style),
            swatch,
            Span::styled(name.label(), style),
        ];
        if *name == current {
            spans.push(Span::styled(" (current)", Style::default().fg(theme.muted_fg)));
        }
        lines.push(Line::from(spans));
    }
    lines.extend(footer(THEME_FOOTER, theme));
    lines
}
