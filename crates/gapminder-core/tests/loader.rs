// File: crates/gapminder-core/tests/loader.rs
// Purpose: CSV loading, "NA" filtering, and the distinguishable failure states.

use gapminder_core::data::MISSING;
use gapminder_core::{Dataset, DashboardConfig, DashboardError, DashboardState};
use pretty_assertions::assert_eq;
use std::io::Write;

fn fixture() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/gapminder_small.csv")
}

#[test]
fn drops_rows_with_missing_primary_fields() {
    let ds = Dataset::load(fixture()).expect("fixture loads");
    assert_eq!(ds.len(), 8);
    assert_eq!(ds.summary().rows_read, 10);
    assert_eq!(ds.summary().rows_dropped, 2);

    // neither Angola 1960 (fertility NA) nor Aruba (life expectancy NA) survive
    assert!(!ds.observations().iter().any(|o| o.country == "Angola" && o.year == 1960));
    assert!(!ds.observations().iter().any(|o| o.country == "Aruba"));
}

#[test]
fn na_filter_holds_for_arbitrary_rows() {
    let mut csv = String::from("country,year,fertility,life_expectancy,population\n");
    let mut expected = 0;
    for i in 0..40 {
        let fert = if i % 3 == 0 { MISSING.to_string() } else { format!("{}.5", i % 7) };
        let life = if i % 5 == 0 { MISSING.to_string() } else { format!("{}", 40 + i) };
        if i % 3 != 0 && i % 5 != 0 {
            expected += 1;
        }
        csv.push_str(&format!("C{i},{},{fert},{life},{}\n", 1960 + i, 1000 + i));
    }
    let ds = Dataset::from_reader(csv.as_bytes()).expect("parse");
    assert_eq!(ds.len(), expected);
    assert!(ds.observations().iter().all(|o| o.fertility.is_finite() && o.life_expectancy.is_finite()));
}

#[test]
fn unknown_population_is_kept_as_none() {
    let ds = Dataset::load(fixture()).unwrap();
    let tuvalu = ds.observations().iter().find(|o| o.country == "Tuvalu").expect("Tuvalu kept");
    assert_eq!(tuvalu.population, None);
    assert_eq!(tuvalu.year, 1980);
}

#[test]
fn years_and_countries_in_first_seen_order() {
    let ds = Dataset::load(fixture()).unwrap();
    assert_eq!(ds.distinct_years(), vec![1960, 1970, 1980]);
    assert_eq!(ds.countries(), vec!["Albania", "Algeria", "Angola", "Tuvalu"]);
    assert_eq!(ds.country_rows("Albania").count(), 3);
}

#[test]
fn header_match_is_case_insensitive_and_order_free() {
    let csv = "Population,Life_Expectancy,Country,Year,Fertility\n1200,71.5,X,1990,2.1\n";
    let ds = Dataset::from_reader(csv.as_bytes()).unwrap();
    let o = &ds.observations()[0];
    assert_eq!((o.country.as_str(), o.year, o.population), ("X", 1990, Some(1200)));
    assert_eq!((o.fertility, o.life_expectancy), (2.1, 71.5));
}

#[test]
fn missing_column_is_reported() {
    let csv = "country,year,fertility,population\nX,1990,2.1,100\n";
    match Dataset::from_reader(csv.as_bytes()) {
        Err(DashboardError::MissingColumn(c)) => assert_eq!(c, "life_expectancy"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn malformed_number_reports_line() {
    let csv = "country,year,fertility,life_expectancy,population\nX,1990,2.1,70,100\nY,19x0,2.0,70,100\n";
    match Dataset::from_reader(csv.as_bytes()) {
        Err(DashboardError::MalformedRow { line, column, value }) => {
            assert_eq!(line, 3);
            assert_eq!(column, "year");
            assert_eq!(value, "19x0");
        }
        other => panic!("expected MalformedRow, got {other:?}"),
    }
}

#[test]
fn non_finite_fertility_or_life_expectancy_is_malformed() {
    for (cell_row, column, value) in [
        ("Y,1990,inf,70,100", "fertility", "inf"),
        ("Y,1990,2.0,NaN,100", "life_expectancy", "NaN"),
        ("Y,1990,-infinity,70,100", "fertility", "-infinity"),
    ] {
        let csv = format!("country,year,fertility,life_expectancy,population\nX,1990,2.1,70,100\n{cell_row}\n");
        match Dataset::from_reader(csv.as_bytes()) {
            Err(DashboardError::MalformedRow { line, column: c, value: v }) => {
                assert_eq!(line, 3);
                assert_eq!(c, column);
                assert_eq!(v, value);
            }
            other => panic!("expected MalformedRow for {cell_row}, got {other:?}"),
        }
    }
}

#[test]
fn missing_file_is_a_load_failure_state() {
    let dir = tempfile::tempdir().unwrap();
    let state = DashboardState::load(Some(&dir.path().join("nope.csv")), DashboardConfig::default());
    match &state {
        DashboardState::Failed(e) => {
            assert!(e.is_load_failure());
            assert!(!e.is_empty_dataset());
        }
        DashboardState::Ready(_) => panic!("load should fail"),
    }
    let scene = state.scene(400, 300);
    assert!(scene.texts().any(|t| t.starts_with("Could not load data")));
}

#[test]
fn fully_filtered_dataset_is_an_empty_state() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    writeln!(f, "country,year,fertility,life_expectancy,population").unwrap();
    writeln!(f, "X,1990,NA,70,100").unwrap();
    writeln!(f, "Y,1990,2.0,NA,100").unwrap();
    f.flush().unwrap();

    let ds = Dataset::load(f.path()).expect("file itself is fine");
    assert!(ds.is_empty());

    let state = DashboardState::from_load(Ok(ds), DashboardConfig::default());
    match &state {
        DashboardState::Failed(e) => assert!(e.is_empty_dataset()),
        DashboardState::Ready(_) => panic!("empty dataset must not be ready"),
    }
    assert!(state.scene(400, 300).texts().any(|t| t.starts_with("Nothing to show")));
}
