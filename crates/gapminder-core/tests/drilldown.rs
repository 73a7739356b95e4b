// File: crates/gapminder-core/tests/drilldown.rs
// Purpose: Per-country population series and the drill-down path.

use std::sync::Arc;
use std::time::Instant;

use gapminder_core::config::DrilldownConfig;
use gapminder_core::geometry::Point;
use gapminder_core::{build_drilldown, country_series, Dashboard, DashboardConfig, Dataset, MarkId, Observation, PointerEvent};
use pretty_assertions::assert_eq;

fn row(year: i32, fertility: f64, life: f64, pop: Option<u64>) -> Observation {
    Observation { country: "X".into(), year, fertility, life_expectancy: life, population: pop }
}

#[test]
fn hovering_1980_mark_draws_path_through_both_years() {
    let ds = Arc::new(Dataset::from_observations(vec![
        row(1980, 2.0, 70.0, Some(1000)),
        row(1981, 1.9, 71.0, Some(2000)),
    ]));
    let mut dash = Dashboard::new(ds, DashboardConfig::default()).unwrap();

    let (id, center, _) = dash.scene().marks().find(|(id, _, _)| *id == MarkId(0)).unwrap();
    let events = dash.handle_pointer(PointerEvent::Move { x: center.x, y: center.y }, Instant::now());
    assert_eq!(events, vec![gapminder_core::HoverEvent::Enter(id)]);

    let scene = dash.overlay().scene().expect("overlay has content");
    let paths: Vec<&[Point]> = scene.paths().collect();
    assert_eq!(paths.len(), 1);
    // 600x600 chart, margin 100: years span x 100..500, population 2000 at top
    assert_eq!(paths[0], &[Point::new(100.0, 500.0), Point::new(500.0, 100.0)]);
    assert!(scene.texts().any(|t| t == "X"));
    assert!(scene.texts().any(|t| t == "Population"));
}

#[test]
fn series_is_sorted_by_year_and_skips_unknown_population() {
    let ds = Dataset::from_observations(vec![
        row(1990, 2.0, 70.0, Some(30)),
        row(1970, 2.0, 70.0, Some(10)),
        row(1980, 2.0, 70.0, None),
        row(1975, 2.0, 70.0, Some(20)),
    ]);
    assert_eq!(country_series(&ds, "X"), vec![(1970, 10), (1975, 20), (1990, 30)]);
    assert!(country_series(&ds, "Nowhere").is_empty());
}

#[test]
fn drilldown_without_population_is_empty_dataset() {
    let ds = Dataset::from_observations(vec![row(1990, 2.0, 70.0, None)]);
    let err = build_drilldown(&ds, "X", &DrilldownConfig::default()).unwrap_err();
    assert!(err.is_empty_dataset());
}

#[test]
fn panel_is_sized_with_padding() {
    let ds = Dataset::from_observations(vec![row(1990, 2.0, 70.0, Some(5)), row(1991, 2.0, 70.0, Some(6))]);
    let scene = build_drilldown(&ds, "X", &DrilldownConfig::default()).unwrap();
    assert_eq!((scene.width, scene.height), (700, 700));
}
