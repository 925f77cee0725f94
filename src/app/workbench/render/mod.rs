use super::Workbench;
use crate::kernel::Action as KernelAction;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::Frame;

mod dialogs;
mod effects;
mod layout;
mod pane;
mod status;

pub(super) fn render(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    let [body_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(super::STATUS_HEIGHT)])
            .areas(area);

    let panes = layout::pane_rects(workbench.store.state().layout.root(), body_area);

    let mut cursor = None;
    let mut resized = Vec::new();
    for (id, rect) in &panes {
        let Some(drawn) = pane::render_pane(workbench, frame, id, *rect) else {
            continue;
        };
        if drawn.cursor.is_some() {
            cursor = drawn.cursor;
        }
        let size = (drawn.output.width, drawn.output.height);
        if workbench.store.state().pane_sizes.get(id) != Some(&size) {
            resized.push((id.clone(), size));
        }
    }

    status::render_status(workbench, frame, status_area);
    workbench.modal_area = dialogs::render_modal(workbench, frame, body_area);
    if workbench.modal_area.is_some() {
        cursor = None;
    }

    if let Some(position) = cursor {
        frame.set_cursor_position(position);
    }
    workbench.cursor = cursor;
    workbench.pane_areas = panes;

    for (session, (width, height)) in resized {
        workbench.dispatch_kernel(KernelAction::PaneResized {
            session,
            width,
            height,
        });
    }
}
