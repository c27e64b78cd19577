// File: crates/tgchart-core/src/axis.rs
// Summary: Category (X) axis: label fitting and thinning, window index mapping, nearest-category lookup.

use std::sync::Arc;

use tracing::debug;

use crate::config::XAxisConfig;
use crate::error::DataError;
use crate::text::LabelMetrics;

/// One X axis slot.
#[derive(Clone, Debug, PartialEq)]
pub struct Category {
    pub x: f32,
    pub label: String,
    pub index: usize,
}

/// A label chosen by thinning, positioned at its category's x.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabel {
    pub index: usize,
    pub x: f32,
    pub text: String,
}

/// Pixel placement of the contiguous category window `[start, end]`.
///
/// Immutable once built; positions are keyed by `index - start` and strictly
/// increasing.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLayout {
    start: usize,
    end: usize,
    step: usize,
    step_x: f32,
    positions: Vec<f32>,
    labels: Arc<[String]>,
    label_indices: Vec<usize>,
}

impl AxisLayout {
    fn build(labels: Arc<[String]>, start: usize, end: usize, left: f32, width: f32, step: usize, count_view: usize) -> Self {
        let span = end - start;
        let (step_x, first) = if span == 0 { (0.0, left + width / 2.0) } else { (width / span as f32, left) };
        let positions = (0..=span).map(|k| first + k as f32 * step_x).collect();
        let label_indices = thin_labels(start, end, step, count_view);
        Self { start, end, step, step_x, positions, labels, label_indices }
    }

    pub fn start(&self) -> usize { self.start }
    pub fn end(&self) -> usize { self.end }
    /// Label stride in category units; `1` means every label is drawn.
    pub fn step(&self) -> usize { self.step }
    /// Number of categories in the window.
    pub fn len(&self) -> usize { self.positions.len() }
    pub fn is_empty(&self) -> bool { self.positions.is_empty() }
    pub fn positions(&self) -> &[f32] { &self.positions }

    /// Pixel x of an absolute category index; `None` outside the window.
    #[inline]
    pub fn x_by_index(&self, index: usize) -> Option<f32> {
        if index < self.start || index > self.end {
            return None;
        }
        self.positions.get(index - self.start).copied()
    }

    pub fn category(&self, index: usize) -> Option<Category> {
        let x = self.x_by_index(index)?;
        Some(Category { x, label: self.labels[index].clone(), index })
    }

    /// Index of the category nearest to `x`, clamped to the window.
    ///
    /// With `pos[i-1] < x <= pos[i]`, `i-1` wins only when strictly closer, so
    /// exact midpoints resolve to the later index.
    pub fn category_index_at(&self, x: f32) -> usize {
        let pos = &self.positions;
        let last = pos.len() - 1;
        if x.is_nan() || x <= pos[0] {
            return self.start;
        }
        if x > pos[last] {
            return self.end;
        }
        let mut i = if self.step_x > 0.0 {
            (((x - pos[0]) / self.step_x).ceil() as usize).clamp(1, last)
        } else {
            last
        };
        while i > 1 && pos[i - 1] >= x {
            i -= 1;
        }
        while i < last && pos[i] < x {
            i += 1;
        }
        let offset = if (x - pos[i - 1]).abs() < (x - pos[i]).abs() { i - 1 } else { i };
        self.start + offset
    }

    pub fn category_at(&self, x: f32) -> Category {
        let index = self.category_index_at(x);
        Category { x: self.positions[index - self.start], label: self.labels[index].clone(), index }
    }

    /// Indices whose labels are drawn, ascending.
    pub fn label_indices(&self) -> &[usize] { &self.label_indices }

    pub fn labels(&self) -> Vec<AxisLabel> {
        self.label_indices
            .iter()
            .filter_map(|&i| {
                let x = self.x_by_index(i)?;
                Some(AxisLabel { index: i, x, text: self.labels[i].clone() })
            })
            .collect()
    }
}

/// `max(1, round(span / count_view))`, the label stride for a window.
pub fn calc_step(span: usize, count_view: usize) -> usize {
    if count_view == 0 {
        return span.max(1);
    }
    ((span as f64 / count_view as f64).round() as usize).max(1)
}

/// Pick evenly spaced label indices in `[start, end]`, counted from `end`.
/// At most `count_view` are kept (never fewer than both boundaries), even when
/// `step` is 1.
pub fn thin_labels(start: usize, end: usize, step: usize, count_view: usize) -> Vec<usize> {
    let span = end - start;
    if span == 0 || (step <= 1 && span < count_view) {
        return (start..=end).collect();
    }
    let count = (span / step.max(1) + 1).min(count_view).max(2);
    let mut out: Vec<usize> = (0..count)
        .map(|k| end - ((k * span) as f64 / (count - 1) as f64).round() as usize)
        .collect();
    out.reverse();
    out.dedup();
    out
}

#[derive(Clone, Debug)]
struct Prepared {
    plot_left: f32,
    plot_width: f32,
    count_view: usize,
    step: usize,
    full: AxisLayout,
}

/// Category axis.
///
/// `prepare` measures labels and derives how many fit in the plot width; it
/// has to run before `update`, which can then be called any number of times
/// with different viewport positions.
#[derive(Clone, Debug)]
pub struct XAxisScale {
    labels: Arc<[String]>,
    font_size: f32,
    label_margin: f32,
    label_width: Option<f32>,
    prepared: Option<Prepared>,
}

impl XAxisScale {
    pub fn new(labels: Vec<String>, config: &XAxisConfig) -> Result<Self, DataError> {
        if labels.len() < 2 {
            return Err(DataError::TooFewCategories(labels.len()));
        }
        Ok(Self {
            labels: labels.into(),
            font_size: config.font_size,
            label_margin: config.label_margin,
            label_width: None,
            prepared: None,
        })
    }

    pub fn len(&self) -> usize { self.labels.len() }
    pub fn is_empty(&self) -> bool { self.labels.is_empty() }
    pub fn labels(&self) -> &[String] { &self.labels }
    pub fn label_width(&self) -> Option<f32> { self.label_width }
    pub fn is_prepared(&self) -> bool { self.prepared.is_some() }

    /// Override the measured label width (the value stays fixed for later passes).
    pub fn set_label_width(&mut self, width: f32) {
        self.label_width = Some(width.max(0.0));
        self.prepared = None;
    }

    /// Measure labels (first call only) and fit them to `plot_width`.
    /// Returns `false` when nothing changed since the last call.
    pub fn prepare(&mut self, plot_left: f32, plot_width: f32, metrics: &dyn LabelMetrics) -> bool {
        if let Some(p) = &self.prepared {
            if p.plot_left == plot_left && p.plot_width == plot_width {
                return false;
            }
        }
        let label_width = *self.label_width.get_or_insert_with(|| metrics.measure(&self.labels, self.font_size));
        let slot = label_width + self.label_margin;
        let count_view = if slot > 0.0 { (plot_width.max(0.0) / slot).floor() as usize } else { self.labels.len() };
        let last = self.labels.len() - 1;
        let step = calc_step(last, count_view);
        let (left, width) = Self::span(plot_left, plot_width, label_width);
        // A full range with step 1 draws every label.
        let fit = if step <= 1 { self.labels.len() } else { count_view };
        let full = AxisLayout::build(self.labels.clone(), 0, last, left, width, step, fit);
        debug!(plot_width, label_width, count_view, step, "x axis prepared");
        self.prepared = Some(Prepared { plot_left, plot_width, count_view, step, full });
        true
    }

    // Categories are inset by half a label so edge labels stay inside the plot.
    fn span(plot_left: f32, plot_width: f32, label_width: f32) -> (f32, f32) {
        let width = (plot_width - label_width).max(1.0);
        (plot_left + (plot_width - width) / 2.0, width)
    }

    /// Maximum number of labels that fit without overlap.
    pub fn count_view(&self) -> Option<usize> {
        self.prepared.as_ref().map(|p| p.count_view)
    }

    /// Every label fits: there is nothing to scroll.
    pub fn all_labels_visible(&self) -> bool {
        self.prepared.as_ref().is_some_and(|p| p.step <= 1)
    }

    /// Layout of every category with no viewport restriction.
    pub fn full_layout(&self) -> Option<&AxisLayout> {
        self.prepared.as_ref().map(|p| &p.full)
    }

    /// Category index under a plot-space position, on the full-resolution scale.
    pub fn index_of_category_by_position(&self, x: f32) -> Option<usize> {
        self.full_layout().map(|full| full.category_index_at(x))
    }

    /// Layout for the window between two plot-space positions; `None` on a side
    /// means unbounded. Returns `None` before `prepare`.
    pub fn update(&self, start_position: Option<f32>, end_position: Option<f32>) -> Option<AxisLayout> {
        let p = self.prepared.as_ref()?;
        let last = self.labels.len() - 1;
        if p.step <= 1 || (start_position.is_none() && end_position.is_none()) {
            return Some(p.full.clone());
        }
        let mut start = start_position.map_or(0, |x| p.full.category_index_at(x)).min(last);
        let mut end = end_position.map_or(last, |x| p.full.category_index_at(x)).min(last);
        if start > end {
            std::mem::swap(&mut start, &mut end);
        }
        let step = calc_step(end - start, p.count_view);
        let label_width = self.label_width.unwrap_or(0.0);
        let (left, width) = Self::span(p.plot_left, p.plot_width, label_width);
        debug!("from {} to {} step={}", start, end, step);
        Some(AxisLayout::build(self.labels.clone(), start, end, left, width, step, p.count_view))
    }
}
