// File: crates/gapminder-core/src/overlay.rs
// Summary: The single floating drill-down panel: anchored content plus opacity fades.
// Notes:
// - One instance per dashboard. Content is replaced on every show, never appended.
// - Hiding only fades opacity; the last content stays until the next show.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::config::{DrilldownConfig, OverlayConfig};
use crate::data::Dataset;
use crate::drilldown::build_drilldown;
use crate::geometry::Point;
use crate::scene::Scene;

/// Cubic ease-in-out on `t` in `[0, 1]`.
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let u = t - 2.0;
        (u * u * u + 2.0) / 2.0
    }
}

/// Opacity transition starting at `start`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fade {
    from: f32,
    to: f32,
    start: Instant,
    duration: Duration,
}

impl Fade {
    pub fn settled(opacity: f32, now: Instant) -> Self {
        Self { from: opacity, to: opacity, start: now, duration: Duration::ZERO }
    }

    pub fn new(from: f32, to: f32, start: Instant, duration: Duration) -> Self {
        Self { from, to, start, duration }
    }

    pub fn target(&self) -> f32 { self.to }

    pub fn opacity_at(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.start).as_secs_f64();
        let t = (elapsed / self.duration.as_secs_f64()).min(1.0);
        let k = ease_cubic_in_out(t) as f32;
        self.from + (self.to - self.from) * k
    }

    pub fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum OverlayContent {
    Empty,
    Chart { country: String, scene: Scene },
    /// Drill-down could not be built (e.g. no population data).
    Message { country: String, scene: Scene },
}

#[derive(Clone, Debug)]
pub struct Overlay {
    anchor: Point,
    content: OverlayContent,
    fade: Fade,
    cfg: OverlayConfig,
    drilldown: DrilldownConfig,
    shows: u64,
}

impl Overlay {
    pub fn new(cfg: OverlayConfig, drilldown: DrilldownConfig, now: Instant) -> Self {
        Self {
            anchor: Point::default(),
            content: OverlayContent::Empty,
            fade: Fade::settled(0.0, now),
            cfg,
            drilldown,
            shows: 0,
        }
    }

    /// Replace the content with `country`'s drill-down, anchor it near `pointer`, fade in.
    pub fn show(&mut self, dataset: &Dataset, country: &str, pointer: Point, now: Instant) {
        let current = self.opacity(now);
        self.fade = Fade::new(current, 1.0, now, Duration::from_millis(self.cfg.fade_in_ms));
        self.content = match build_drilldown(dataset, country, &self.drilldown) {
            Ok(scene) => OverlayContent::Chart { country: country.to_string(), scene },
            Err(err) => {
                debug!(country, %err, "drill-down unavailable");
                let (w, h) = self.drilldown.panel_size();
                OverlayContent::Message {
                    country: country.to_string(),
                    scene: Scene::message(w, h, format!("{country}: {err}")),
                }
            }
        };
        self.anchor = pointer.offset(0.0, self.cfg.offset_y);
        self.shows += 1;
    }

    /// Fade out; content is kept.
    pub fn hide(&mut self, now: Instant) {
        let current = self.opacity(now);
        self.fade = Fade::new(current, 0.0, now, Duration::from_millis(self.cfg.fade_out_ms));
    }

    pub fn opacity(&self, now: Instant) -> f32 { self.fade.opacity_at(now) }

    pub fn is_animating(&self, now: Instant) -> bool { !self.fade.is_done(now) }

    /// Target opacity of the running (or finished) transition.
    pub fn target_opacity(&self) -> f32 { self.fade.target() }

    pub fn anchor(&self) -> Point { self.anchor }

    pub fn content(&self) -> &OverlayContent { &self.content }

    pub fn scene(&self) -> Option<&Scene> {
        match &self.content {
            OverlayContent::Empty => None,
            OverlayContent::Chart { scene, .. } | OverlayContent::Message { scene, .. } => Some(scene),
        }
    }

    pub fn country(&self) -> Option<&str> {
        match &self.content {
            OverlayContent::Empty => None,
            OverlayContent::Chart { country, .. } | OverlayContent::Message { country, .. } => Some(country),
        }
    }

    /// How many times content has been (re)built.
    pub fn show_count(&self) -> u64 { self.shows }
}
