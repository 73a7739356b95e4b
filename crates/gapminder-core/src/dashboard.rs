// File: crates/gapminder-core/src/dashboard.rs
// Summary: Dashboard controller (load lifecycle, pointer hover, year selection) over an immutable dataset snapshot.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error, info};

use crate::config::DashboardConfig;
use crate::data::{Dataset, Observation};
use crate::error::{DashboardError, Result};
use crate::geometry::Point;
use crate::overlay::Overlay;
use crate::primary::{build_primary_view, PrimaryView};
use crate::scene::{Display, MarkId, Scene};
use crate::year_filter::{VisibilityPartition, YearSelector};

/// Pointer input in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Move { x: f64, y: f64 },
    /// Pointer left the drawing surface.
    Left,
}

/// Enter/leave transitions produced by pointer input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverEvent {
    Enter(MarkId),
    Leave(MarkId),
}

pub struct Dashboard {
    dataset: Arc<Dataset>,
    config: DashboardConfig,
    primary: PrimaryView,
    selector: YearSelector,
    partition: VisibilityPartition,
    overlay: Overlay,
    hovered: Option<MarkId>,
}

impl Dashboard {
    pub fn new(dataset: Arc<Dataset>, config: DashboardConfig) -> Result<Self> {
        Self::new_at(dataset, config, Instant::now())
    }

    pub fn new_at(dataset: Arc<Dataset>, config: DashboardConfig, now: Instant) -> Result<Self> {
        config.validate()?;
        let mut primary = build_primary_view(&dataset, &config)?;
        let selector = YearSelector::from_dataset(&dataset, config.default_year);
        // computed once here; only recomputed later when the filter is live
        let partition = selector.partition(&dataset);
        partition.apply(&mut primary.scene);
        let overlay = Overlay::new(config.overlay, config.drilldown, now);
        info!(
            marks = dataset.len(),
            visible = partition.visible.len(),
            selected = ?selector.selected(),
            "dashboard ready"
        );
        Ok(Self { dataset, config, primary, selector, partition, overlay, hovered: None })
    }

    pub fn dataset(&self) -> &Arc<Dataset> { &self.dataset }
    pub fn config(&self) -> &DashboardConfig { &self.config }
    pub fn scene(&self) -> &Scene { &self.primary.scene }
    pub fn primary(&self) -> &PrimaryView { &self.primary }
    pub fn selector(&self) -> &YearSelector { &self.selector }
    pub fn partition(&self) -> &VisibilityPartition { &self.partition }
    pub fn overlay(&self) -> &Overlay { &self.overlay }
    pub fn hovered(&self) -> Option<MarkId> { self.hovered }

    pub fn observation(&self, mark: MarkId) -> Option<&Observation> {
        self.dataset.get(self.primary.observation_index(mark))
    }

    /// Feed one pointer event; returns the enter/leave transitions it caused.
    pub fn handle_pointer(&mut self, event: PointerEvent, now: Instant) -> Vec<HoverEvent> {
        let (hit, at) = match event {
            PointerEvent::Move { x, y } => {
                let p = Point::new(x, y);
                (self.primary.scene.hit_test(p), Some(p))
            }
            PointerEvent::Left => (None, None),
        };
        if hit == self.hovered {
            return Vec::new();
        }

        let mut events = Vec::with_capacity(2);
        if let Some(prev) = self.hovered.take() {
            self.overlay.hide(now);
            events.push(HoverEvent::Leave(prev));
        }
        if let (Some(mark), Some(p)) = (hit, at) {
            self.on_enter(mark, p, now);
            self.hovered = Some(mark);
            events.push(HoverEvent::Enter(mark));
        }
        debug!(?events, "hover transition");
        events
    }

    fn on_enter(&mut self, mark: MarkId, pointer: Point, now: Instant) {
        let Some(obs) = self.dataset.get(self.primary.observation_index(mark)) else {
            return;
        };
        let country = obs.country.clone();
        self.overlay.show(&self.dataset, &country, pointer, now);
    }

    /// Change the selected year. Mark visibility follows only when the filter is live.
    pub fn select_year(&mut self, year: i32) -> bool {
        if !self.selector.select(year) {
            return false;
        }
        self.after_selection();
        true
    }

    /// Move the selection by `delta` options.
    pub fn step_year(&mut self, delta: isize) -> bool {
        if !self.selector.step(delta) {
            return false;
        }
        self.after_selection();
        true
    }

    fn after_selection(&mut self) {
        if !self.config.live_year_filter {
            debug!(selected = ?self.selector.selected(), "year changed; filter not live, marks unchanged");
            return;
        }
        self.partition = self.selector.partition(&self.dataset);
        self.partition.apply(&mut self.primary.scene);
        // the hovered mark may have just been hidden
        if let Some(h) = self.hovered {
            if self.primary.scene.display_of(h) == Some(Display::None) {
                self.hovered = None;
                self.overlay.hide(Instant::now());
            }
        }
    }
}

/// Load → ready/failed lifecycle.
pub enum DashboardState {
    Ready(Box<Dashboard>),
    Failed(DashboardError),
}

impl DashboardState {
    pub fn from_load(result: Result<Dataset>, config: DashboardConfig) -> Self {
        let state = result.and_then(|ds| Dashboard::new(Arc::new(ds), config));
        match state {
            Ok(d) => DashboardState::Ready(Box::new(d)),
            Err(e) => {
                error!(%e, "dashboard unavailable");
                DashboardState::Failed(e)
            }
        }
    }

    /// Load `config.data_path` (or `path` when given) and build the dashboard.
    pub fn load(path: Option<&Path>, config: DashboardConfig) -> Self {
        let path = path.unwrap_or(config.data_path.as_path()).to_path_buf();
        Self::from_load(Dataset::load(&path), config)
    }

    pub fn is_ready(&self) -> bool { matches!(self, DashboardState::Ready(_)) }

    /// Primary scene, or a message scene explaining the failure.
    pub fn scene(&self, width: u32, height: u32) -> Scene {
        match self {
            DashboardState::Ready(d) => d.scene().clone(),
            DashboardState::Failed(e) if e.is_empty_dataset() => {
                Scene::message(width, height, format!("Nothing to show: {e}"))
            }
            DashboardState::Failed(e) => Scene::message(width, height, format!("Could not load data: {e}")),
        }
    }
}
