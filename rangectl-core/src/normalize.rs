//! Normalization: normalized [0,1] values to display units and back to text.
//!
//! Pure functions only. The display scale may be descending (`max < min`);
//! that is accepted and simply flips the direction of the mapping.

use serde::{Deserialize, Serialize};

/// Default lower display bound.
pub const DEFAULT_MIN: f64 = 0.0;
/// Default upper display bound.
pub const DEFAULT_MAX: f64 = 100.0;

/// Display-unit bounds of a control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayRange {
    pub min: f64,
    pub max: f64,
}

impl Default for DisplayRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
        }
    }
}

impl DisplayRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Map a normalized value into this range, rounded to one decimal.
    pub fn to_display(&self, normalized: f64) -> f64 {
        to_display(normalized, self.min, self.max)
    }

    /// Rendered text for a normalized value: display value followed by `unit`.
    pub fn format(&self, normalized: f64, unit: &str) -> String {
        format_display(self.to_display(normalized), unit)
    }
}

/// `round((normalized * (max - min) + min) * 10) / 10`.
///
/// Halves round toward positive infinity, so `-2.25` displays as `-2.2`.
pub fn to_display(normalized: f64, min: f64, max: f64) -> f64 {
    let actual = normalized * (max - min) + min;
    round_half_up(actual * 10.0) / 10.0
}

/// Render a display value with its unit suffix.
///
/// Integral values print without a fractional part (`25%`, not `25.0%`),
/// negative zero prints as `0` and infinities as `Infinity`.
pub fn format_display(display: f64, unit: &str) -> String {
    if display.is_infinite() {
        let sign = if display < 0.0 { "-" } else { "" };
        return format!("{sign}Infinity{unit}");
    }
    // -0.0 == 0.0, so this also normalizes the sign.
    let display = if display == 0.0 { 0.0 } else { display };
    format!("{display}{unit}")
}

/// Nearest integer, halves toward positive infinity.
///
/// Compares the fractional part instead of adding 0.5, which would round
/// values just below a half up.
fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn just_below_half_rounds_down() {
        // 0.049999999999999996 * 10 = 0.49999999999999994
        assert_eq!(to_display(0.049999999999999996, 0.0, 1.0), 0.0);
        assert_eq!(round_half_up(0.49999999999999994), 0.0);
        assert_eq!(round_half_up(22.5), 23.0);
    }

    #[test]
    fn infinite_bounds_render_as_infinity() {
        let range = DisplayRange::new(0.0, f64::INFINITY);
        assert_eq!(range.format(0.5, "%"), "Infinity%");
        assert_eq!(DisplayRange::new(0.0, f64::NEG_INFINITY).format(0.5, ""), "-Infinity");
    }

    #[test]
    fn display_rounding() {
        assert_eq!(to_display(0.5, 0.0, 100.0), 50.0);
        assert_eq!(to_display(0.333, 0.0, 10.0), 3.3);
        assert_eq!(to_display(1.0, -20.0, 20.0), 20.0);
    }

    #[test]
    fn descending_scale_is_supported() {
        assert_eq!(to_display(0.0, 100.0, 0.0), 100.0);
        assert_eq!(to_display(0.25, 100.0, 0.0), 75.0);
        assert_eq!(to_display(1.0, 100.0, 0.0), 0.0);
    }

    #[test]
    fn halves_round_up() {
        // 0.125 * 20 = 2.5 -> 25 tenths
        assert_eq!(to_display(0.125, 0.0, 2.0), 0.3);
        assert_eq!(round_half_up(-22.5), -22.0);
    }

    #[test]
    fn format_drops_trailing_zero() {
        assert_eq!(format_display(25.0, "%"), "25%");
        assert_eq!(format_display(3.3, "px"), "3.3px");
        assert_eq!(format_display(-0.0, ""), "0");
    }

    #[test]
    fn range_format_uses_bounds() {
        let range = DisplayRange::new(-20.0, 20.0);
        assert_eq!(range.format(0.5, "°"), "0°");
        assert_eq!(range.format(0.75, "°"), "10°");
        assert_eq!(DisplayRange::default().format(0.75, "%"), "75%");
    }
}
