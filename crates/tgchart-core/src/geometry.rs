// File: crates/tgchart-core/src/geometry.rs
// Summary: Pixel points/rects and per-series polyline geometry for the visible window.

use std::collections::BTreeMap;

use crate::axis::AxisLayout;
use crate::scale::AxisRange;
use crate::series::Series;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self { Self { x, y } }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn is_empty(&self) -> bool { self.width() <= 0.0 || self.height() <= 0.0 }

    /// Inclusive on every edge.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

/// Pixel geometry of one series inside one layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesGeometry {
    pub id: String,
    pub color: String,
    /// Disjoint polylines; each has at least two points.
    pub polylines: Vec<Vec<Point>>,
    /// Category index → pixel y for every non-gap value in the window.
    pub points: BTreeMap<usize, f32>,
    /// Largest value plotted in the window.
    pub max_visible: Option<f64>,
}

impl SeriesGeometry {
    /// Project `series` through the window of `axis` into `plot`.
    pub fn build(series: &Series, axis: &AxisLayout, range: &AxisRange, plot: RectF) -> Self {
        let mut polylines = Vec::new();
        let mut points = BTreeMap::new();
        let mut current: Vec<Point> = Vec::new();
        let mut max_visible: Option<f64> = None;

        for index in axis.start()..=axis.end() {
            let (Some(value), Some(x)) = (series.value(index), axis.x_by_index(index)) else {
                flush(&mut current, &mut polylines);
                continue;
            };
            let y = plot.bottom - range.calc_height_by_value(value, plot.height());
            current.push(Point::new(x, y));
            points.insert(index, y);
            max_visible = Some(max_visible.map_or(value, |m: f64| m.max(value)));
        }
        flush(&mut current, &mut polylines);

        Self { id: series.id.clone(), color: series.color.clone(), polylines, points, max_visible }
    }

    pub fn y_at(&self, index: usize) -> Option<f32> {
        self.points.get(&index).copied()
    }
}

// A lone point between two gaps draws nothing.
fn flush(current: &mut Vec<Point>, out: &mut Vec<Vec<Point>>) {
    if current.len() >= 2 {
        out.push(std::mem::take(current));
    } else {
        current.clear();
    }
}
