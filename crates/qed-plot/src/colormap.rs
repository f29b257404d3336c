//! Sequential colormaps for surface plots.

use plotters::style::RGBColor;

/// Red → yellow ramp. `t` is clamped to [0, 1].
pub fn autumn(t: f64) -> RGBColor {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    RGBColor(255, (255.0 * t).round() as u8, 0)
}

/// Position of `v` inside `[lo, hi]` as a fraction. Degenerate ranges map to 0.
pub fn normalize(v: f64, lo: f64, hi: f64) -> f64 {
    let span = hi - lo;
    if span.abs() < f64::EPSILON {
        return 0.0;
    }
    (v - lo) / span
}
