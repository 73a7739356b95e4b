// File: crates/gapminder-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math and hit testing.

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }

    pub fn offset(self, dx: f64, dy: f64) -> Self { Self::new(self.x + dx, self.y + dy) }

    pub fn distance_sq(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }
}

/// Whether `p` lies inside (or on) the circle at `center` with radius `r`.
#[inline]
pub fn circle_contains(center: Point, r: f64, p: Point) -> bool {
    r > 0.0 && center.distance_sq(p) <= r * r
}
