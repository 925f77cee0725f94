use crate::kernel::{LayoutNode, SessionId, SplitDirection};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen rect of every leaf, in tree order.
pub(super) fn pane_rects(root: &LayoutNode, area: Rect) -> Vec<(SessionId, Rect)> {
    let mut out = Vec::new();
    collect(root, area, &mut out);
    out
}

fn collect(node: &LayoutNode, area: Rect, out: &mut Vec<(SessionId, Rect)>) {
    match node {
        LayoutNode::Leaf(id) => out.push((id.clone(), area)),
        LayoutNode::Split(split) => {
            let direction = match split.direction {
                SplitDirection::Horizontal => Direction::Horizontal,
                SplitDirection::Vertical => Direction::Vertical,
            };
            let total: u32 = split.sizes.iter().map(|s| u32::from(*s)).sum::<u32>().max(1);
            let constraints = split
                .sizes
                .iter()
                .map(|s| Constraint::Ratio(u32::from(*s), total));
            let areas = Layout::default()
                .direction(direction)
                .constraints(constraints)
                .split(area);
            for (child, child_area) in split.children.iter().zip(areas.iter()) {
                collect(child, *child_area, out);
            }
        }
    }
}
