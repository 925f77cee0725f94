use super::super::Workbench;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const HINTS: &str = "Ctrl+T themes · Alt+H/V split · Alt+W close · Ctrl+L clear · Ctrl+Q quit";

pub(super) fn render_status(workbench: &Workbench, frame: &mut Frame, area: Rect) {
    let state = workbench.store.state();
    let theme = &workbench.theme;
    let panes = state.sessions.len();

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", state.active),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "· {} pane{} · theme: {} · ",
                panes,
                if panes == 1 { "" } else { "s" },
                state.theme.label()
            ),
            Style::default().fg(theme.muted_fg),
        ),
        Span::styled(HINTS, Style::default().fg(theme.inactive_border)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
