// File: crates/gapminder-core/src/axis.rs
// Summary: Axis construction (scales, tick marks, labels) for a canvas with uniform margins.

use crate::extent::AxisLimits;
use crate::geometry::Point;
use crate::scale::{LinearScale, ScaleTransform};
use crate::scene::{Ink, SceneNode, TextAnchor};
use crate::types::{pt, Canvas};

/// Approximate number of ticks per axis.
pub const TICK_COUNT: usize = 10;
/// Length of tick lines and of the domain line's outer ticks.
pub const TICK_SIZE: f64 = 6.0;
/// Gap between a tick line and its label.
pub const TICK_PADDING: f64 = 3.0;
pub const TICK_FONT_PX: f32 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Bottom,
    Left,
}

/// One axis: a scale drawn along a canvas edge.
#[derive(Clone, Copy, Debug)]
pub struct Axis {
    pub orientation: Orientation,
    pub scale: LinearScale,
    /// Pixel position of the axis line (y for Bottom, x for Left).
    pub offset: f64,
}

impl Axis {
    pub fn bottom(scale: LinearScale, y: f64) -> Self {
        Self { orientation: Orientation::Bottom, scale, offset: y }
    }

    pub fn left(scale: LinearScale, x: f64) -> Self {
        Self { orientation: Orientation::Left, scale, offset: x }
    }

    /// Domain line, tick lines and tick labels.
    pub fn nodes(&self) -> Vec<SceneNode> {
        let (r0, r1) = self.scale.range();
        let ticks = self.scale.ticks(TICK_COUNT);
        let fmt = self.scale.tick_format(TICK_COUNT);
        let o = self.offset;
        let mut out = Vec::with_capacity(3 + ticks.len() * 2);

        let line = |from: Point, to: Point| SceneNode::Line { from, to, ink: Ink::Axis, width: 1.0 };

        match self.orientation {
            Orientation::Bottom => {
                out.push(line(Point::new(r0, o + TICK_SIZE), Point::new(r0, o)));
                out.push(line(Point::new(r0, o), Point::new(r1, o)));
                out.push(line(Point::new(r1, o), Point::new(r1, o + TICK_SIZE)));
                for t in ticks {
                    let x = self.scale.map(t);
                    out.push(line(Point::new(x, o), Point::new(x, o + TICK_SIZE)));
                    out.push(SceneNode::Text {
                        pos: Point::new(x, o + TICK_SIZE + TICK_PADDING),
                        content: fmt(t),
                        size_px: TICK_FONT_PX,
                        anchor: TextAnchor::Middle,
                        dy_em: 0.71,
                        rotate_deg: 0.0,
                        ink: Ink::TickLabel,
                    });
                }
            }
            Orientation::Left => {
                out.push(line(Point::new(o - TICK_SIZE, r0), Point::new(o, r0)));
                out.push(line(Point::new(o, r0), Point::new(o, r1)));
                out.push(line(Point::new(o, r1), Point::new(o - TICK_SIZE, r1)));
                for t in ticks {
                    let y = self.scale.map(t);
                    out.push(line(Point::new(o - TICK_SIZE, y), Point::new(o, y)));
                    out.push(SceneNode::Text {
                        pos: Point::new(o - TICK_SIZE - TICK_PADDING, y),
                        content: fmt(t),
                        size_px: TICK_FONT_PX,
                        anchor: TextAnchor::End,
                        dy_em: 0.32,
                        rotate_deg: 0.0,
                        ink: Ink::TickLabel,
                    });
                }
            }
        }
        out
    }
}

/// Scales for one chart plus their axis marks.
#[derive(Clone, Copy, Debug)]
pub struct AxisFrame {
    pub canvas: Canvas,
    pub x_scale: LinearScale,
    /// Inverted: `y_max` maps to the top margin.
    pub y_scale: LinearScale,
}

impl AxisFrame {
    pub fn new(limits: &AxisLimits, canvas: Canvas) -> Self {
        let x_scale = LinearScale::new((limits.x_min, limits.x_max), canvas.x_range());
        let y_scale = LinearScale::new((limits.y_max, limits.y_min), canvas.y_range());
        Self { canvas, x_scale, y_scale }
    }

    #[inline]
    pub fn map_x(&self, v: f64) -> f64 { self.x_scale.map(v) }

    #[inline]
    pub fn map_y(&self, v: f64) -> f64 { self.y_scale.map(v) }

    /// Data pair to pixel coordinate.
    #[inline]
    pub fn map(&self, x: f64, y: f64) -> Point { Point::new(self.map_x(x), self.map_y(y)) }

    pub fn x_axis(&self) -> Axis {
        Axis::bottom(self.x_scale, (self.canvas.height - self.canvas.margin) as f64)
    }

    pub fn y_axis(&self) -> Axis {
        Axis::left(self.y_scale, self.canvas.margin as f64)
    }

    pub fn axis_nodes(&self) -> Vec<SceneNode> {
        let mut v = self.x_axis().nodes();
        v.extend(self.y_axis().nodes());
        v
    }
}

/// Build scales for `limits` on `canvas`; returns the frame and its axis marks.
pub fn draw_axes(limits: &AxisLimits, canvas: Canvas) -> (AxisFrame, Vec<SceneNode>) {
    let frame = AxisFrame::new(limits, canvas);
    let nodes = frame.axis_nodes();
    (frame, nodes)
}

/// Title and axis captions at fixed offsets from the canvas edges.
pub fn make_labels(canvas: Canvas, title: &str, x_label: &str, y_label: &str) -> Vec<SceneNode> {
    let half_inner = canvas.inner_width() as f64 / 2.0;
    let h = canvas.height as f64;
    vec![
        SceneNode::text(Point::new(half_inner - 90.0, canvas.margin as f64 / 2.0 + 10.0), title, pt(30.0)),
        SceneNode::text(Point::new(half_inner - 30.0, h - 10.0), x_label, pt(15.0)),
        SceneNode::Text {
            pos: Point::new(15.0, h / 2.0 + 30.0),
            content: y_label.to_string(),
            size_px: pt(15.0),
            anchor: TextAnchor::Start,
            dy_em: 0.0,
            rotate_deg: -90.0,
            ink: Ink::Label,
        },
    ]
}
