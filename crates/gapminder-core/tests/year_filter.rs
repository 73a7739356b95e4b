// File: crates/gapminder-core/tests/year_filter.rs
// Purpose: Selector options, default selection, and the construction-time visibility partition.

use std::sync::Arc;

use gapminder_core::{Dashboard, DashboardConfig, Dataset, Display, MarkId, Observation, YearSelector};
use pretty_assertions::assert_eq;

fn obs(country: &str, year: i32, pop: u64) -> Observation {
    Observation {
        country: country.to_string(),
        year,
        fertility: 2.0 + (year - 1960) as f64 / 20.0,
        life_expectancy: 60.0 + (year - 1960) as f64 / 2.0,
        population: Some(pop),
    }
}

fn three_decades() -> Dataset {
    Dataset::from_observations(vec![
        obs("A", 1970, 2_000),
        obs("A", 1960, 1_000),
        obs("B", 1980, 9_000),
        obs("A", 1980, 3_000),
        obs("B", 1960, 4_000),
    ])
}

#[test]
fn options_are_distinct_in_first_seen_order_with_1980_selected() {
    let sel = YearSelector::from_dataset(&three_decades(), 1980);
    assert_eq!(sel.options(), &[1970, 1960, 1980]);
    assert_eq!(sel.selected(), Some(1980));
}

#[test]
fn missing_default_falls_back_to_first_option() {
    let sel = YearSelector::from_years(vec![1990, 1991], 1980);
    assert_eq!(sel.selected(), Some(1990));
    assert_eq!(YearSelector::from_years(Vec::new(), 1980).selected(), None);
}

#[test]
fn only_selected_year_marks_are_visible_after_construction() {
    let ds = Arc::new(three_decades());
    let dash = Dashboard::new(ds.clone(), DashboardConfig::default()).unwrap();

    assert_eq!(dash.partition().visible, vec![MarkId(2), MarkId(3)]);
    assert_eq!(dash.partition().hidden, vec![MarkId(0), MarkId(1), MarkId(4)]);

    for (i, o) in ds.observations().iter().enumerate() {
        let want = if o.year == 1980 { Display::Inline } else { Display::None };
        assert_eq!(dash.scene().display_of(MarkId(i)), Some(want), "mark {i}");
    }
    assert_eq!(dash.scene().visible_mark_count(), 2);
}

#[test]
fn changing_selection_does_not_repartition_by_default() {
    let mut dash = Dashboard::new(Arc::new(three_decades()), DashboardConfig::default()).unwrap();
    let before = dash.scene().clone();

    assert!(dash.select_year(1960));
    assert_eq!(dash.selector().selected(), Some(1960));
    assert_eq!(dash.scene(), &before);
    assert_eq!(dash.partition().visible, vec![MarkId(2), MarkId(3)]);
}

#[test]
fn live_filter_repartitions_on_change() {
    let cfg = DashboardConfig { live_year_filter: true, ..DashboardConfig::default() };
    let mut dash = Dashboard::new(Arc::new(three_decades()), cfg).unwrap();

    assert!(dash.select_year(1960));
    assert_eq!(dash.partition().visible, vec![MarkId(1), MarkId(4)]);
    assert_eq!(dash.scene().display_of(MarkId(2)), Some(Display::None));
    assert_eq!(dash.scene().display_of(MarkId(4)), Some(Display::Inline));

    // unknown year is ignored
    assert!(!dash.select_year(2001));
    assert_eq!(dash.selector().selected(), Some(1960));
}

#[test]
fn stepping_walks_options_and_saturates() {
    let mut sel = YearSelector::from_years(vec![1960, 1970, 1980], 1980);
    assert!(!sel.step(1));
    assert!(sel.step(-1));
    assert_eq!(sel.selected(), Some(1970));
    assert!(sel.step(-5));
    assert_eq!(sel.selected(), Some(1960));
}
