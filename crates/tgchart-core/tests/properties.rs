// File: crates/tgchart-core/tests/properties.rs
// Purpose: Property checks for bounds containment, monotonic mapping (full range and windows), lookup round trip,
// label thinning and viewport rescaling.

use quickcheck_macros::quickcheck;
use tgchart_core::axis::thin_labels;
use tgchart_core::{AxisLayout, AxisRange, Extent, FixedAdvance, ViewportWindow, XAxisConfig, XAxisScale};

fn scale(n: u8, width: u16) -> (XAxisScale, f32) {
    let n = 2 + n as usize;
    let width = 50.0 + (width % 2000) as f32;
    let labels = (0..n).map(|i| format!("c{i}")).collect();
    let mut x = XAxisScale::new(labels, &XAxisConfig::default()).unwrap();
    x.prepare(10.0, width, &FixedAdvance::default());
    (x, width)
}

#[quickcheck]
fn nice_bounds_contain_the_extent(values: Vec<i32>) -> bool {
    let mut it = values.iter().map(|&v| v as f64 / 10.0);
    let Some(first) = it.next() else { return true };
    let extent = it.fold(Extent::new(first, first), Extent::include);
    AxisRange::from_extent(extent, 5).contains(extent)
}

#[quickcheck]
fn category_positions_increase(n: u8, width: u16) -> bool {
    let (x, _) = scale(n, width);
    x.full_layout().unwrap().positions().windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn position_lookup_round_trips(n: u8, width: u16) -> bool {
    let (x, _) = scale(n, width);
    let full = x.full_layout().unwrap();
    (0..x.len()).all(|i| full.x_by_index(i).map(|px| full.category_index_at(px)) == Some(i))
}

// Window between the full-scale positions of categories `a` and `b`.
fn window(n: u8, width: u16, a: u8, b: u8) -> AxisLayout {
    let (x, _) = scale(n, width);
    let full = x.full_layout().unwrap();
    let (a, b) = (a as usize % x.len(), b as usize % x.len());
    x.update(full.x_by_index(a), full.x_by_index(b)).unwrap()
}

#[quickcheck]
fn window_positions_increase(n: u8, width: u16, a: u8, b: u8) -> bool {
    window(n, width, a, b).positions().windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn window_lookup_round_trips(n: u8, width: u16, a: u8, b: u8) -> bool {
    let w = window(n, width, a, b);
    (w.start()..=w.end()).all(|i| w.x_by_index(i).map(|px| w.category_index_at(px)) == Some(i))
}

#[quickcheck]
fn window_labels_keep_both_ends(n: u8, width: u16, a: u8, b: u8) -> bool {
    let w = window(n, width, a, b);
    let shown = w.label_indices();
    shown.first() == Some(&w.start()) && shown.last() == Some(&w.end())
}

#[quickcheck]
fn lookup_never_leaves_the_window(n: u8, width: u16, probe: i16) -> bool {
    let (x, _) = scale(n, width);
    let full = x.full_layout().unwrap();
    let i = full.category_index_at(probe as f32);
    i >= full.start() && i <= full.end()
}

#[quickcheck]
fn thinning_keeps_both_boundaries(start: u8, span: u8, step: u8, count_view: u8) -> bool {
    let (start, end) = (start as usize, start as usize + span as usize);
    let shown = thin_labels(start, end, step as usize, count_view as usize);
    shown.first() == Some(&start) && shown.last() == Some(&end) && shown.windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn rescale_preserves_the_selected_fraction(left: u16, width: u16, from: u16, to: u16) -> bool {
    let from = 100.0 + (from % 2000) as f32;
    let to = 100.0 + (to % 2000) as f32;
    let left = (left as f32 % from).min(from - 1.0);
    let right = (left + 1.0 + width as f32).min(from);
    let w = ViewportWindow::from_edges(left, right, from);
    let r = w.rescaled(to);
    let close = |a: f32, b: f32| (a - b).abs() <= 1e-3;
    close(r.left_edge() / to, w.left_edge() / from) && close(r.right_edge() / to, w.right_edge() / from)
}
