use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Header / body / footer regions.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let regions = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);
    (regions[0], regions[1], regions[2])
}

/// Side-by-side split for the skills step: skill list left, job input right.
pub fn two_column(area: Rect) -> (Rect, Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    (columns[0], columns[1])
}
