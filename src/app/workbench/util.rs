use ratatui::layout::Rect;

/// A `width` x `height` rect centred in `area`, shrunk to fit.
pub(super) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// A `width` x `height` rect with its top-left at `anchor`, pushed back inside `area`.
pub(super) fn anchored_rect(width: u16, height: u16, anchor: (u16, u16), area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = anchor.0.clamp(area.x, area.x + area.width - width);
    let y = anchor.1.clamp(area.y, area.y + area.height - height);
    Rect::new(x, y, width, height)
}

pub(super) fn rect_contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}

/// Index of the text row at `y` inside a bordered `area`; `None` on the borders or outside.
pub(super) fn bordered_row(area: Rect, y: u16) -> Option<usize> {
    let row = y.checked_sub(area.y + 1)?;
    (row + 2 < area.height).then_some(row as usize)
}
