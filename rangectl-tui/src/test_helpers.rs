//! Shared fixtures for unit tests.

use ratatui::layout::Rect;
use rangectl_core::ControlSet;

use crate::app::{AppState, ControlLayout};

/// Demo set laid out the way a 44-column frame would draw it:
/// brightness block at row 0 (track row 1), temperature block at row 5
/// (track row 6). Both tracks span columns 2..42.
pub fn laid_out_demo() -> AppState {
    let mut app = AppState::new(&ControlSet::demo());
    app.set_layout(
        0,
        ControlLayout {
            area: Rect::new(0, 0, 44, 3),
            track: Rect::new(2, 1, 40, 1),
        },
    );
    app.set_layout(
        1,
        ControlLayout {
            area: Rect::new(0, 5, 44, 3),
            track: Rect::new(2, 6, 40, 1),
        },
    );
    app.drain_events();
    app.event_log.clear();
    app
}
