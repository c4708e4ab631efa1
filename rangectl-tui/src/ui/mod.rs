//! Top-level UI layout: stacked controls above the event log and status bar.

pub mod event_log;
pub mod slider;
pub mod status_bar;

use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;

use crate::app::AppState;

/// Rows taken by one control block.
pub const CONTROL_HEIGHT: u16 = 3;

/// Draw the entire UI.
///
/// Takes the state mutably: laying out a control updates its track
/// geometry, which the control re-renders against before it is painted.
pub fn draw(f: &mut Frame, app: &mut AppState) {
    let count = u16::try_from(app.slots.len()).unwrap_or(u16::MAX);
    let [controls_area, log_area, status_area] = Layout::vertical([
        Constraint::Length(count.saturating_mul(CONTROL_HEIGHT)),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(f.area());

    let rows = Layout::vertical(vec![Constraint::Length(CONTROL_HEIGHT); app.slots.len()])
        .split(controls_area);
    for (index, area) in rows.iter().enumerate() {
        app.set_layout(index, slider::layout(*area));
    }
    for (index, slot) in app.slots.iter().enumerate() {
        if let Some(layout) = slot.layout {
            slider::render(f, layout, slot, index == app.focused);
        }
    }

    event_log::render(f, log_area, app);
    status_bar::render(f, status_area, app);
}
