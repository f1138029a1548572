use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub(super) fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Horizontally centred column of `percent_x` width, full height.
pub(super) fn centered_column(percent_x: u16, r: Rect) -> Rect {
    let side = (100 - percent_x.min(100)) / 2;
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(side),
            Constraint::Percentage(percent_x),
            Constraint::Percentage(side),
        ])
        .split(r)[1]
}

/// `n` equal-width slots across `area`.
pub(super) fn slots(area: Rect, n: u16) -> Vec<Rect> {
    let width = area.width / n.max(1);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..n).map(|_| Constraint::Length(width)).collect::<Vec<_>>())
        .split(area)
        .to_vec()
}
