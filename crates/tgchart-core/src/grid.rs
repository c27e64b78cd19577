// File: crates/tgchart-core/src/grid.rs
// Summary: Grid line layout: Y ticks with pixel rows and labels, X grid columns at drawn labels.

use crate::axis::AxisLayout;
use crate::format::format_value;
use crate::geometry::RectF;
use crate::scale::AxisRange;

/// One horizontal grid line.
#[derive(Clone, Debug, PartialEq)]
pub struct YTick {
    pub value: f64,
    /// Pixel row inside the plot.
    pub y: f32,
    pub label: String,
}

/// Grid rows for `range`, mapped with the same function as series points.
pub fn y_ticks(range: &AxisRange, plot: RectF) -> Vec<YTick> {
    range
        .ticks()
        .into_iter()
        .map(|value| YTick {
            value,
            y: plot.bottom - range.calc_height_by_value(value, plot.height()),
            label: format_value(value),
        })
        .collect()
}

/// Pixel columns of the labels drawn for `axis`.
pub fn x_grid(axis: &AxisLayout) -> Vec<f32> {
    axis.label_indices().iter().filter_map(|&i| axis.x_by_index(i)).collect()
}
