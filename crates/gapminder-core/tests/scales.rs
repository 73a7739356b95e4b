// File: crates/gapminder-core/tests/scales.rs
// Purpose: Extent, linear/sqrt scale, and tick properties.

use gapminder_core::scale::ticks;
use gapminder_core::{find_min_max, AxisFrame, AxisLimits, Canvas, Extent, LinearScale, ScaleTransform, SqrtScale};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

proptest! {
    #[test]
    fn extent_bounds_every_element(values in prop::collection::vec(-1e9f64..1e9, 1..200)) {
        let e = Extent::of(values.iter().copied()).expect("non-empty");
        for v in &values {
            prop_assert!(e.contains(*v));
        }
        prop_assert!(values.contains(&e.min));
        prop_assert!(values.contains(&e.max));
    }

    #[test]
    fn y_mapping_reverses_order(
        lo in -1e6f64..1e6,
        span in 1e-3f64..1e6,
        a_frac in 0.0f64..1.0,
        gap in 1e-3f64..1.0,
    ) {
        let limits = AxisLimits { x_min: 0.0, x_max: 1.0, y_min: lo, y_max: lo + span };
        let frame = AxisFrame::new(&limits, Canvas::primary());
        let a = lo + a_frac * span;
        let b = a + gap * span;
        prop_assert!(frame.map_y(a) > frame.map_y(b));
    }

    #[test]
    fn radius_never_shrinks_with_population(
        max in 1.0f64..2e9,
        p in 0.0f64..1.0,
        q in 0.0f64..1.0,
    ) {
        let s = SqrtScale::new((0.0, max), (2.0, 40.0));
        let (a, b) = if p <= q { (p * max, q * max) } else { (q * max, p * max) };
        prop_assert!(s.map(a) <= s.map(b));
    }

    #[test]
    fn quadrupling_population_doubles_radius_above_minimum(max in 1e3f64..2e9, frac in 1e-4f64..0.25) {
        let r0 = 2.0;
        let s = SqrtScale::new((0.0, max), (r0, 40.0));
        let p = frac * max;
        let lhs = s.map(4.0 * p) - r0;
        let rhs = 2.0 * (s.map(p) - r0);
        prop_assert!((lhs - rhs).abs() <= 1e-9 * rhs.max(1.0));
    }
}

#[test]
fn empty_input_fails_fast() {
    assert!(Extent::of(std::iter::empty()).is_none());
    let err = find_min_max(Vec::<f64>::new(), vec![1.0]).unwrap_err();
    assert!(err.is_empty_dataset());
    let err = find_min_max(vec![1.0], Vec::<f64>::new()).unwrap_err();
    assert!(err.is_empty_dataset());
}

#[test]
fn nan_is_ignored_by_extent() {
    let e = Extent::of([3.0, f64::NAN, -1.0]).unwrap();
    assert_eq!((e.min, e.max), (-1.0, 3.0));
}

#[test]
fn axes_span_the_margins() {
    let limits = AxisLimits { x_min: 1.0, x_max: 8.0, y_min: 30.0, y_max: 80.0 };
    let frame = AxisFrame::new(&limits, Canvas::primary());
    assert_eq!(frame.map_x(1.0), 100.0);
    assert_eq!(frame.map_x(8.0), 900.0);
    // larger values plot higher
    assert_eq!(frame.map_y(80.0), 100.0);
    assert_eq!(frame.map_y(30.0), 900.0);
}

#[test]
fn degenerate_domain_maps_to_mid_range() {
    let s = LinearScale::new((1980.0, 1980.0), (100.0, 500.0));
    assert_eq!(s.map(1980.0), 300.0);
    let r = SqrtScale::new((1000.0, 1000.0), (2.0, 40.0));
    assert_eq!(r.map(1000.0), 21.0);
}

#[test]
fn linear_invert_round_trips_a_pixel() {
    let s = LinearScale::new((70.0, 40.0), (100.0, 900.0));
    assert!((s.invert(s.map(55.0)) - 55.0).abs() < 1e-9);
}

#[test]
fn ticks_follow_nice_steps() {
    assert_eq!(ticks(0.0, 1.0, 10), vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0]);
    assert_eq!(ticks(3.62, 7.65, 10), vec![4.0, 4.5, 5.0, 5.5, 6.0, 6.5, 7.0, 7.5]);
    assert_eq!(ticks(1960.0, 2016.0, 10), (0..12).map(|i| 1960.0 + 5.0 * i as f64).collect::<Vec<_>>());
    assert_eq!(ticks(5.0, 5.0, 10), vec![5.0]);
    // reversed domains yield the same ascending ticks
    assert_eq!(ticks(10.0, 0.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
}

#[test]
fn tick_labels_use_step_precision_and_grouping() {
    let fert = LinearScale::new((3.62, 7.65), (100.0, 900.0));
    let f = fert.tick_format(10);
    assert_eq!(f(4.0), "4.0");
    assert_eq!(f(6.5), "6.5");

    let years = LinearScale::new((1960.0, 2016.0), (100.0, 500.0));
    assert_eq!(years.tick_format(10)(1960.0), "1,960");

    let pop = LinearScale::new((2_000_000.0, 1_000_000.0), (100.0, 500.0));
    assert_eq!(pop.tick_format(10)(1_500_000.0), "1,500,000");
}
