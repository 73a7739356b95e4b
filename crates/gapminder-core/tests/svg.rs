// File: crates/gapminder-core/tests/svg.rs
// Purpose: SVG output carries the mark classes, display attributes and the drill-down path.

use gapminder_core::config::DrilldownConfig;
use gapminder_core::render::to_svg;
use gapminder_core::{build_drilldown, build_primary_view, DashboardConfig, Dashboard, Dataset, Observation, Theme};
use std::sync::Arc;

fn fixture() -> Dataset {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/gapminder_small.csv");
    Dataset::load(path).unwrap()
}

#[test]
fn primary_svg_marks_hidden_years_with_display_none() {
    let dash = Dashboard::new(Arc::new(fixture()), DashboardConfig::default()).unwrap();
    let svg = to_svg(dash.scene(), &Theme::light());

    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    // 8 rows survive loading; Tuvalu has no population and gets no circle
    assert_eq!(svg.matches(r#"class="circles""#).count(), 7);
    assert_eq!(svg.matches(r#"display="none""#).count(), 4);
    assert_eq!(svg.matches(r#"display="inline""#).count(), 3);
    assert!(svg.contains(r##"stroke="#87ceeb""##));
    assert!(svg.contains("Fertility vs Life Expectancy (1980)"));
    assert!(svg.contains(r#"transform="translate(15,530) rotate(-90)""#));
}

#[test]
fn unpartitioned_view_has_no_display_attributes() {
    let view = build_primary_view(&fixture(), &DashboardConfig::default()).unwrap();
    let svg = to_svg(&view.scene, &Theme::light());
    assert!(!svg.contains("display="));
    assert!(svg.contains(r#"data-mark="0""#));
}

#[test]
fn drilldown_svg_is_one_unfilled_path() {
    let rows = vec![
        Observation { country: "A & B".into(), year: 1990, fertility: 2.0, life_expectancy: 70.0, population: Some(10) },
        Observation { country: "A & B".into(), year: 2000, fertility: 2.0, life_expectancy: 71.0, population: Some(20) },
    ];
    let scene = build_drilldown(&Dataset::from_observations(rows), "A & B", &DrilldownConfig::default()).unwrap();
    let svg = to_svg(&scene, &Theme::light());

    assert_eq!(svg.matches("<path ").count(), 1);
    assert!(svg.contains(r#"d="M100,500L500,100""#));
    assert!(svg.contains(r#"fill="none""#));
    assert!(svg.contains(r##"stroke="#0000ff""##));
    assert!(svg.contains(">A &amp; B</text>"));
    assert!(svg.contains(r#"width="700" height="700""#));
}
