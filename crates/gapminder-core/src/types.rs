// File: crates/gapminder-core/src/types.rs
// Summary: Shared types and constants (canvas sizes, margins, label offsets).

use serde::Deserialize;

/// Primary scatter canvas edge, in pixels.
pub const PRIMARY_SIZE: u32 = 1000;
/// Drill-down chart edge, in pixels.
pub const DRILLDOWN_SIZE: u32 = 600;
/// Uniform margin on every side of both charts.
pub const MARGIN: u32 = 100;
/// Extra room around the drill-down chart inside its panel.
pub const PANEL_PADDING: u32 = 100;

/// Convert CSS points to pixels (96 dpi).
#[inline]
pub fn pt(points: f32) -> f32 {
    points * 4.0 / 3.0
}

/// Drawing area with a uniform margin.
/// Contract: `2 * margin < min(width, height)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
}

impl Canvas {
    pub const fn new(width: u32, height: u32, margin: u32) -> Self {
        Self { width, height, margin }
    }

    pub const fn primary() -> Self {
        Self::new(PRIMARY_SIZE, PRIMARY_SIZE, MARGIN)
    }

    pub const fn drilldown() -> Self {
        Self::new(DRILLDOWN_SIZE, DRILLDOWN_SIZE, MARGIN)
    }

    /// Pixel interval covered by the x axis.
    pub fn x_range(&self) -> (f64, f64) {
        (self.margin as f64, self.width.saturating_sub(self.margin) as f64)
    }

    /// Pixel interval covered by the y axis, top to bottom.
    pub fn y_range(&self) -> (f64, f64) {
        (self.margin as f64, self.height.saturating_sub(self.margin) as f64)
    }

    /// Width of the plotting area between margins.
    pub const fn inner_width(&self) -> u32 { self.width.saturating_sub(self.margin.saturating_mul(2)) }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::primary()
    }
}
