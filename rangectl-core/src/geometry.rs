//! Geometry mapper: pointer pixels to normalized values and back.
//!
//! The fill channel spans the full track width. The handle channel travels
//! over `width - handle_width` so the handle never overhangs the track end.
//! A zero-width track is a degenerate layout: the fill mapping then yields a
//! non-finite ratio and nothing guards against it.

use serde::{Deserialize, Serialize};

/// Fixed handle width in pixels.
pub const HANDLE_WIDTH_PX: f64 = 16.0;

/// Clamp to [0,1]. NaN passes through unchanged.
pub fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Bounding box of the track along the drag axis, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrackGeometry {
    pub left: f64,
    pub width: f64,
}

impl TrackGeometry {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Horizontal travel available to the handle's left edge.
    pub fn max_handle_left(&self, handle_width: f64) -> f64 {
        self.width - handle_width
    }

    /// Normalized fill value for a pointer at `pointer_x`.
    pub fn fill_value_at(&self, pointer_x: f64) -> f64 {
        clamp01((pointer_x - self.left) / self.width)
    }

    /// Normalized handle value for a pointer at `pointer_x`.
    ///
    /// Returns 0 when the track is too narrow to give the handle any travel.
    pub fn handle_value_at(&self, pointer_x: f64, handle_width: f64) -> f64 {
        let max_left = self.max_handle_left(handle_width);
        if max_left.is_nan() || max_left <= 0.0 {
            return 0.0;
        }
        let clamped_x = (pointer_x - self.left).clamp(0.0, max_left);
        clamped_x / max_left
    }

    /// Rendered fill width in pixels, floored at 0.
    pub fn fill_width(&self, value: f64) -> f64 {
        (value * self.width).max(0.0)
    }

    /// Rendered handle left offset in pixels, floored at 0.
    pub fn handle_left(&self, value: f64, handle_width: f64) -> f64 {
        (value * self.max_handle_left(handle_width)).max(0.0)
    }
}
