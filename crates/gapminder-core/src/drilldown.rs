// File: crates/gapminder-core/src/drilldown.rs
// Summary: Population-over-time chart for one country, drawn as a single connected path.

use crate::axis::{draw_axes, make_labels};
use crate::config::DrilldownConfig;
use crate::data::Dataset;
use crate::error::{DashboardError, Result};
use crate::extent::find_min_max;
use crate::geometry::{Point, Rect};
use crate::scene::{Ink, Scene, SceneNode};

pub const X_LABEL: &str = "Year";
pub const Y_LABEL: &str = "Population";

/// `(year, population)` for `country`, ascending by year. Unknown populations are skipped.
pub fn country_series(dataset: &Dataset, country: &str) -> Vec<(i32, u64)> {
    let mut pts: Vec<(i32, u64)> = dataset
        .country_rows(country)
        .filter_map(|o| o.population.map(|p| (o.year, p)))
        .collect();
    pts.sort_by_key(|&(year, _)| year);
    pts
}

/// Panel-sized scene: background, axes, the population path and labels.
pub fn build_drilldown(dataset: &Dataset, country: &str, cfg: &DrilldownConfig) -> Result<Scene> {
    let series = country_series(dataset, country);
    if series.is_empty() {
        return Err(DashboardError::EmptyDataset("no population data for country"));
    }
    let limits = find_min_max(
        series.iter().map(|&(y, _)| y as f64),
        series.iter().map(|&(_, p)| p as f64),
    )?;

    let canvas = cfg.canvas();
    let (pw, ph) = cfg.panel_size();
    let mut scene = Scene::new(pw, ph);
    scene.background = Ink::PanelBackground;
    scene.push(SceneNode::Rect { rect: Rect::from_ltwh(0.0, 0.0, pw as f64, ph as f64), fill: Ink::PanelBackground });

    let (frame, axes) = draw_axes(&limits, canvas);
    scene.extend(axes);

    let points: Vec<Point> = series.iter().map(|&(y, p)| frame.map(y as f64, p as f64)).collect();
    scene.push(SceneNode::Path { points, stroke: Ink::Series, width: 1.0 });

    scene.extend(make_labels(canvas, country, X_LABEL, Y_LABEL));
    Ok(scene)
}
