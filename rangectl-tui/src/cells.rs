//! Terminal cells ↔ pixel coordinates.
//!
//! Controls think in pixels. The terminal host gives every cell a fixed
//! horizontal extent of [`CELL_PX`] so the 16 px handle covers two cells.

use ratatui::layout::Rect;
use rangectl_core::TrackGeometry;

/// Horizontal pixels per terminal cell.
pub const CELL_PX: f64 = 8.0;

/// Pointer coordinate of a mouse event in `column`: the cell's centre.
pub fn column_to_px(column: u16) -> f64 {
    f64::from(column) * CELL_PX + CELL_PX / 2.0
}

/// Track bounding box for a one-row track rect.
pub fn track_geometry(track: Rect) -> TrackGeometry {
    TrackGeometry::new(f64::from(track.x) * CELL_PX, f64::from(track.width) * CELL_PX)
}

/// Number of whole cells covered by `px`, capped at `max_cells`.
pub fn px_to_cells(px: f64, max_cells: u16) -> u16 {
    if !px.is_finite() || px <= 0.0 {
        return 0;
    }
    let cells = (px / CELL_PX).round();
    if cells >= f64::from(max_cells) {
        max_cells
    } else {
        cells as u16
    }
}
