// File: crates/gapminder-core/src/extent.rs
// Summary: Min/max reductions used to derive axis limits.

use crate::error::{DashboardError, Result};

/// Closed `[min, max]` interval over a set of values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    /// Straight min/max scan. NaN entries are skipped; `None` when nothing is left.
    pub fn of<I: IntoIterator<Item = f64>>(values: I) -> Option<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut any = false;
        for v in values {
            if v.is_nan() { continue; }
            min = min.min(v);
            max = max.max(v);
            any = true;
        }
        any.then_some(Self { min, max })
    }

    pub fn contains(&self, v: f64) -> bool { v >= self.min && v <= self.max }
}

/// Axis limits for one view's field pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLimits {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// Limits over two value columns; fails fast when either is empty.
pub fn find_min_max<X, Y>(xs: X, ys: Y) -> Result<AxisLimits>
where
    X: IntoIterator<Item = f64>,
    Y: IntoIterator<Item = f64>,
{
    let x = Extent::of(xs).ok_or(DashboardError::EmptyDataset("no x values to scale"))?;
    let y = Extent::of(ys).ok_or(DashboardError::EmptyDataset("no y values to scale"))?;
    Ok(AxisLimits { x_min: x.min, x_max: x.max, y_min: y.min, y_max: y.max })
}
