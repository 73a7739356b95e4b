// File: crates/gapminder-core/src/scene.rs
// Summary: Retained-mode scene description (mark descriptors) shared by the SVG and raster backends.
// Notes:
// - Nodes carry semantic inks, not colors; a Theme resolves them at render time.
// - Later nodes paint over earlier ones; hit testing walks the list backwards.

use crate::geometry::{circle_contains, Point, Rect};

/// Stable handle binding a circle mark to its observation index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub usize);

/// Visibility attribute of a partitioned mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Display {
    Inline,
    None,
}

impl Display {
    pub fn as_str(self) -> &'static str {
        match self {
            Display::Inline => "inline",
            Display::None => "none",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ink {
    Background,
    Axis,
    TickLabel,
    Label,
    MarkStroke,
    MarkFill,
    Series,
    PanelBackground,
    Message,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    Line {
        from: Point,
        to: Point,
        ink: Ink,
        width: f32,
    },
    Rect {
        rect: Rect,
        fill: Ink,
    },
    Circle {
        center: Point,
        r: f64,
        stroke: Ink,
        fill: Ink,
        stroke_width: f32,
        mark: Option<MarkId>,
        /// `None` until a visibility partition has touched the mark.
        display: Option<Display>,
    },
    /// Open polyline, stroked only.
    Path {
        points: Vec<Point>,
        stroke: Ink,
        width: f32,
    },
    Text {
        pos: Point,
        content: String,
        size_px: f32,
        anchor: TextAnchor,
        /// Baseline shift in ems.
        dy_em: f32,
        /// Degrees, applied around `pos`.
        rotate_deg: f32,
        ink: Ink,
    },
}

impl SceneNode {
    pub fn text(pos: Point, content: impl Into<String>, size_px: f32) -> Self {
        SceneNode::Text {
            pos,
            content: content.into(),
            size_px,
            anchor: TextAnchor::Start,
            dy_em: 0.0,
            rotate_deg: 0.0,
            ink: Ink::Label,
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, SceneNode::Circle { display: Some(Display::None), .. })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub background: Ink,
    pub nodes: Vec<SceneNode>,
}

impl Scene {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, background: Ink::Background, nodes: Vec::new() }
    }

    /// Single-message scene for load failures and empty data.
    pub fn message(width: u32, height: u32, text: impl Into<String>) -> Self {
        let mut s = Self::new(width, height);
        s.push(SceneNode::Text {
            pos: Point::new(width as f64 / 2.0, height as f64 / 2.0),
            content: text.into(),
            size_px: 18.0,
            anchor: TextAnchor::Middle,
            dy_em: 0.32,
            rotate_deg: 0.0,
            ink: Ink::Message,
        });
        s
    }

    pub fn push(&mut self, node: SceneNode) {
        self.nodes.push(node);
    }

    pub fn extend<I: IntoIterator<Item = SceneNode>>(&mut self, nodes: I) {
        self.nodes.extend(nodes);
    }

    /// Topmost visible mark under `p`. Hidden marks never receive pointer events.
    pub fn hit_test(&self, p: Point) -> Option<MarkId> {
        self.nodes.iter().rev().find_map(|n| match n {
            SceneNode::Circle { center, r, mark: Some(id), display, .. }
                if *display != Some(Display::None) && circle_contains(*center, *r, p) =>
            {
                Some(*id)
            }
            _ => None,
        })
    }

    /// Apply `f` to every mark and store the returned display.
    pub fn partition_marks<F: FnMut(MarkId) -> Display>(&mut self, mut f: F) {
        for n in &mut self.nodes {
            if let SceneNode::Circle { mark: Some(m), display, .. } = n {
                *display = Some(f(*m));
            }
        }
    }

    pub fn display_of(&self, id: MarkId) -> Option<Display> {
        self.nodes.iter().find_map(|n| match n {
            SceneNode::Circle { mark: Some(m), display, .. } if *m == id => *display,
            _ => None,
        })
    }

    pub fn marks(&self) -> impl Iterator<Item = (MarkId, Point, f64)> + '_ {
        self.nodes.iter().filter_map(|n| match n {
            SceneNode::Circle { center, r, mark: Some(id), .. } => Some((*id, *center, *r)),
            _ => None,
        })
    }

    pub fn visible_mark_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, SceneNode::Circle { mark: Some(_), .. }) && n.is_visible())
            .count()
    }

    pub fn paths(&self) -> impl Iterator<Item = &[Point]> + '_ {
        self.nodes.iter().filter_map(|n| match n {
            SceneNode::Path { points, .. } => Some(points.as_slice()),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().filter_map(|n| match n {
            SceneNode::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
    }
}
