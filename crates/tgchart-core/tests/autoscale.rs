// File: crates/tgchart-core/tests/autoscale.rs
// Purpose: Y axis nice bounds, tick generation, value->pixel mapping and transitions.

use tgchart_core::scale::{bottom_value, calc_height_by_value, top_value, FALLBACK_TOP};
use tgchart_core::{AxisRange, Extent, SlideDirection, YAxisRange};

#[test]
fn top_and_bottom_round_outward() {
    assert_eq!(top_value(95.0), 100.0);
    assert_eq!(bottom_value(-5.0), -10.0);

    assert_eq!(top_value(250.0), 300.0);
    assert_eq!(top_value(42.0), 50.0);
    assert_eq!(top_value(5.0), 10.0);
    assert_eq!(top_value(0.0), 10.0);
    assert_eq!(top_value(-3.0), 0.0);

    assert_eq!(bottom_value(0.0), 0.0);
    assert_eq!(bottom_value(40.0), 0.0);
    assert_eq!(bottom_value(500.0), 50.0);
    assert_eq!(bottom_value(-250.0), -300.0);
}

#[test]
fn ticks_run_bottom_to_top_inclusive() {
    let r = AxisRange::from_extent(Extent::new(-5.0, 95.0), 5);
    assert_eq!((r.top, r.bottom, r.step), (100.0, -10.0, 22.0));
    assert_eq!(r.ticks(), vec![-10.0, 12.0, 34.0, 56.0, 78.0, 100.0]);
    assert!(r.contains(Extent::new(-5.0, 95.0)));
}

#[test]
fn flat_extent_still_gets_a_range() {
    let r = AxisRange::from_extent(Extent::new(42.0, 42.0), 5);
    assert_eq!((r.top, r.bottom, r.step), (50.0, 0.0, 10.0));
    assert_eq!(r.ticks().len(), 6);
}

#[test]
fn zero_step_yields_only_the_bottom_tick() {
    let r = AxisRange::fallback(100);
    assert_eq!(r.step, 0.0);
    assert_eq!(r.ticks(), vec![0.0]);
}

#[test]
fn fallback_range_covers_zero_to_ten() {
    let r = AxisRange::fallback(5);
    assert_eq!((r.bottom, r.top, r.step), (0.0, FALLBACK_TOP, 2.0));
}

#[test]
fn negative_bottom_shifts_the_mapping() {
    assert_eq!(calc_height_by_value(-10.0, 100.0, -10.0, 110.0), 0.0);
    assert_eq!(calc_height_by_value(100.0, 100.0, -10.0, 110.0), 110.0);
    assert_eq!(calc_height_by_value(45.0, 100.0, -10.0, 110.0), 55.0);
    // non-negative bottoms map from zero
    assert_eq!(calc_height_by_value(50.0, 100.0, 50.0, 200.0), 100.0);
    assert_eq!(calc_height_by_value(3.0, 0.0, 0.0, 200.0), 0.0);
}

#[test]
fn transitions_report_direction() {
    let mut y = YAxisRange::new(5);
    let first = y.update(Some(Extent::new(0.0, 95.0)));
    assert!(first.from.is_none());
    assert!(!first.should_animate());

    let same = y.update(Some(Extent::new(3.0, 93.0)));
    assert!(!same.should_animate());
    assert_eq!(same.direction(), None);

    let up = y.update(Some(Extent::new(0.0, 250.0)));
    assert!(up.should_animate());
    assert_eq!(up.direction(), Some(SlideDirection::Up));

    let down = y.update(None);
    assert_eq!(down.to.top, FALLBACK_TOP);
    assert_eq!(down.direction(), Some(SlideDirection::Down));
    assert_eq!(y.current(), Some(down.to));
}
