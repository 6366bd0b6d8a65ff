use ratatui::layout::{Constraint, Layout, Rect};

use super::constants::{FORM_HEIGHT, FORM_WIDTH};

/// Screen regions of the form, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormAreas {
    pub frame: Rect,
    pub title: Rect,
    pub label: Rect,
    pub input: Rect,
    pub button: Rect,
    pub status: Rect,
    pub hints: Rect,
}

/// Center a fixed-size card in `area` (shrinking it on small terminals) and split it.
pub fn form_areas(area: Rect) -> FormAreas {
    let [_, column, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(FORM_WIDTH.min(area.width)),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, frame, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(FORM_HEIGHT.min(area.height)),
        Constraint::Fill(1),
    ])
    .areas(column);

    let inner = Rect {
        x: frame.x.saturating_add(1),
        y: frame.y.saturating_add(1),
        width: frame.width.saturating_sub(2),
        height: frame.height.saturating_sub(2),
    };
    let [title, label, input, _, button, _, status, hints] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(inner);

    FormAreas {
        frame,
        title,
        label,
        input,
        button,
        status,
        hints,
    }
}
