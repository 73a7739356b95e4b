// File: crates/gapminder-core/src/primary.rs
// Summary: Primary scatter view: fertility vs life expectancy, one population-sized circle per observation.

use tracing::debug;

use crate::axis::{draw_axes, make_labels, AxisFrame};
use crate::config::DashboardConfig;
use crate::data::Dataset;
use crate::error::{DashboardError, Result};
use crate::extent::{find_min_max, Extent};
use crate::scale::{ScaleTransform, SqrtScale};
use crate::scene::{Ink, MarkId, Scene, SceneNode};

pub const TITLE: &str = "Fertility vs Life Expectancy (1980)";
pub const X_LABEL: &str = "Fertility Rates";
pub const Y_LABEL: &str = "Life Expectancy";

/// Built scatter view. `MarkId(i)` is bound to observation `i` of the dataset.
#[derive(Clone, Debug)]
pub struct PrimaryView {
    pub scene: Scene,
    pub frame: AxisFrame,
    pub radius: SqrtScale,
}

impl PrimaryView {
    pub fn observation_index(&self, mark: MarkId) -> usize { mark.0 }
}

/// Square-root radius scale over the population extent of the whole dataset,
/// so marks from different years share one scale.
pub fn radius_scale(dataset: &Dataset, range: (f64, f64)) -> Result<SqrtScale> {
    let pop = Extent::of(dataset.observations().iter().filter_map(|o| o.population).map(|p| p as f64))
        .ok_or(DashboardError::EmptyDataset("no population values for mark radius"))?;
    Ok(SqrtScale::new((pop.min, pop.max), range))
}

pub fn build_primary_view(dataset: &Dataset, config: &DashboardConfig) -> Result<PrimaryView> {
    if dataset.is_empty() {
        return Err(DashboardError::EmptyDataset("no observations left after filtering"));
    }
    let rows = dataset.observations();
    let limits = find_min_max(rows.iter().map(|o| o.fertility), rows.iter().map(|o| o.life_expectancy))?;
    let canvas = config.primary;

    let mut scene = Scene::new(canvas.width, canvas.height);
    let (frame, axes) = draw_axes(&limits, canvas);
    scene.extend(axes);

    let radius = radius_scale(dataset, config.radius_range)?;
    let mut undrawn = 0usize;
    for (i, o) in rows.iter().enumerate() {
        // unknown population: no radius, nothing to draw
        let Some(pop) = o.population else {
            undrawn += 1;
            continue;
        };
        scene.push(SceneNode::Circle {
            center: frame.map(o.fertility, o.life_expectancy),
            r: radius.map(pop as f64),
            stroke: Ink::MarkStroke,
            fill: Ink::MarkFill,
            stroke_width: 1.0,
            mark: Some(MarkId(i)),
            display: None,
        });
    }
    if undrawn > 0 {
        debug!(undrawn, "observations without population were not drawn");
    }

    scene.extend(make_labels(canvas, TITLE, X_LABEL, Y_LABEL));
    Ok(PrimaryView { scene, frame, radius })
}
