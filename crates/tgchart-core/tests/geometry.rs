// File: crates/tgchart-core/tests/geometry.rs
// Purpose: Series polylines break at gaps; grid rows share the series mapping.

use tgchart_core::grid::y_ticks;
use tgchart_core::{AxisRange, Extent, FixedAdvance, Point, RectF, Series, SeriesGeometry, XAxisConfig, XAxisScale};

fn four_categories() -> XAxisScale {
    let labels = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
    let mut x = XAxisScale::new(labels, &XAxisConfig::default()).unwrap();
    x.set_label_width(0.0);
    x.prepare(0.0, 300.0, &FixedAdvance::default());
    x
}

#[test]
fn gap_splits_line_and_drops_lone_point() {
    let x = four_categories();
    let axis = x.update(None, None).unwrap();
    assert_eq!(axis.positions(), &[0.0, 100.0, 200.0, 300.0]);

    let series = Series::new("y0", "Joined", "#3DC23F", vec![Some(10.0), None, Some(30.0), Some(40.0)]);
    let range = AxisRange::from_extent(Extent::new(10.0, 40.0), 5);
    assert_eq!((range.bottom, range.top), (0.0, 40.0));
    let plot = RectF::from_ltwh(0.0, 0.0, 300.0, 200.0);

    let g = SeriesGeometry::build(&series, &axis, &range, plot);
    assert_eq!(g.polylines, vec![vec![Point::new(200.0, 50.0), Point::new(300.0, 0.0)]]);
    assert_eq!(g.y_at(1), None);
    // the lone point is still addressable for tooltips
    assert_eq!(g.y_at(0), Some(150.0));
    assert_eq!(g.max_visible, Some(40.0));
}

#[test]
fn window_limits_the_projected_indices() {
    let labels = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
    let mut x = XAxisScale::new(labels, &XAxisConfig::default()).unwrap();
    x.set_label_width(100.0);
    x.prepare(0.0, 300.0, &FixedAdvance::default());
    assert!(!x.all_labels_visible());
    let full = x.full_layout().unwrap().clone();
    let axis = x.update(full.x_by_index(1), full.x_by_index(3)).unwrap();
    let series = Series::with_values("y0", &[5.0, 6.0, 7.0, 8.0]);
    let range = AxisRange::from_extent(Extent::new(6.0, 8.0), 5);
    let g = SeriesGeometry::build(&series, &axis, &range, RectF::from_ltwh(0.0, 0.0, 300.0, 100.0));
    assert_eq!(g.points.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(g.polylines.len(), 1);
    assert_eq!(g.polylines[0].len(), 3);
    assert_eq!(g.polylines[0][0].x, 50.0);
    assert_eq!(g.polylines[0][2].x, 250.0);
}

#[test]
fn grid_rows_match_series_rows() {
    let range = AxisRange::from_extent(Extent::new(-5.0, 95.0), 5);
    let plot = RectF::from_ltwh(0.0, 10.0, 300.0, 110.0);
    let ticks = y_ticks(&range, plot);
    assert_eq!(ticks.len(), 6);
    assert_eq!(ticks[0].y, plot.bottom);
    assert_eq!(ticks[5].y, plot.top);
    assert_eq!(ticks[5].label, "100");
    assert_eq!(ticks[0].label, "-10");
}
