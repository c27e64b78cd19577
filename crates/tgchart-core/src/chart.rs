// File: crates/tgchart-core/src/chart.rs
// Summary: Chart controller: owns axes, viewport and series; recomputes layout snapshots and notifies listeners.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::axis::{AxisLayout, XAxisScale};
use crate::config::ChartConfig;
use crate::data::{CategoryLabel, ChartData};
use crate::error::{ChartError, DataError};
use crate::geometry::{RectF, SeriesGeometry};
use crate::grid::{y_ticks, YTick};
use crate::listener::{ChartEvent, ChartListener, UpdateCause};
use crate::scale::{AxisRange, AxisTransition, YAxisRange};
use crate::series::Series;
use crate::text::{LabelMetrics, TextShaper};
use crate::tooltip::Tooltip;
use crate::view::{visible_extent, DragHandle, Viewport, ViewportWindow};

/// Screen regions of one layout pass, top to bottom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Regions {
    pub title: Option<RectF>,
    pub plot: RectF,
    /// Band under the plot holding the X labels.
    pub x_labels: RectF,
    /// Scroll track; absent when every label already fits.
    pub track: Option<RectF>,
    pub legend: RectF,
}

impl Regions {
    fn compute(config: &ChartConfig, with_track: bool) -> Result<Self, ChartError> {
        let too_small = ChartError::TooSmall { width: config.width, height: config.height };
        let insets = config.insets;
        let left = insets.left;
        let right = config.width - insets.right;
        let mut top = insets.top;
        let title = config.title.as_ref().map(|_| {
            let r = RectF::from_ltrb(left, top, right, top + config.title_height);
            top = r.bottom;
            r
        });
        let legend = RectF::from_ltrb(left, config.height - insets.bottom - config.legend_height, right, config.height - insets.bottom);
        let track = with_track.then(|| RectF::from_ltrb(left, legend.top - config.viewport.height, right, legend.top));
        let band_bottom = track.map_or(legend.top, |t| t.top);
        let band_height = config.x_axis.label_margin_top + config.x_axis.font_size;
        let x_labels = RectF::from_ltrb(left, band_bottom - band_height, right, band_bottom);
        let plot = RectF::from_ltrb(left, top, right, x_labels.top);
        if plot.is_empty() {
            return Err(too_small);
        }
        Ok(Self { title, plot, x_labels, track, legend })
    }

    /// Horizontal plot extent, known before the track decision.
    fn plot_span(config: &ChartConfig) -> (f32, f32) {
        (config.insets.left, config.width - config.insets.hsum())
    }
}

/// Thumb, masks and miniature lines drawn in the scroll track.
#[derive(Clone, Debug, PartialEq)]
pub struct Overview {
    /// Y range over the full domain.
    pub range: AxisRange,
    pub series: Vec<SeriesGeometry>,
    pub thumb: RectF,
    pub left_mask: RectF,
    pub right_mask: RectF,
    pub left_handle: RectF,
    pub right_handle: RectF,
}

/// Everything a presentation layer needs to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    pub width: f32,
    pub height: f32,
    pub regions: Regions,
    pub x: AxisLayout,
    pub y: AxisRange,
    pub transition: AxisTransition,
    pub y_ticks: Vec<YTick>,
    /// Visible series only, in input order.
    pub series: Vec<SeriesGeometry>,
    pub overview: Option<Overview>,
    /// `None` when the scroll track is hidden.
    pub viewport: Option<ViewportWindow>,
    pub all_labels_visible: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem {
    pub id: String,
    pub name: String,
    pub color: String,
    pub visible: bool,
}

pub struct Chart {
    config: ChartConfig,
    categories: Vec<CategoryLabel>,
    series: Vec<Series>,
    x_axis: XAxisScale,
    y_axis: YAxisRange,
    viewport: Viewport,
    metrics: Box<dyn LabelMetrics>,
    listeners: Vec<Box<dyn ChartListener>>,
    layout: ChartLayout,
    previous: Option<ChartLayout>,
    hover: Option<usize>,
}

impl Chart {
    /// Build a chart from already parsed categories and series.
    pub fn from_parts(
        config: ChartConfig,
        categories: Vec<CategoryLabel>,
        series: Vec<Series>,
        metrics: Box<dyn LabelMetrics>,
    ) -> Result<Self, ChartError> {
        let mut seen = HashSet::new();
        for s in &series {
            if !seen.insert(s.id.as_str()) {
                return Err(ChartError::DuplicateSeries(s.id.clone()));
            }
            if s.len() != categories.len() {
                return Err(DataError::LengthMismatch {
                    id: s.id.clone(),
                    expected: categories.len(),
                    found: s.len(),
                }
                .into());
            }
        }
        let labels = categories.iter().map(|c| c.axis.clone()).collect();
        let mut x_axis = XAxisScale::new(labels, &config.x_axis)?;
        let mut y_axis = YAxisRange::new(config.y_axis.ticks_count);
        let mut viewport = Viewport::new(&config.viewport);
        let layout = layout_pass(&config, &mut x_axis, &mut y_axis, &mut viewport, &series, metrics.as_ref())?;
        Ok(Self {
            config,
            categories,
            series,
            x_axis,
            y_axis,
            viewport,
            metrics,
            listeners: Vec::new(),
            layout,
            previous: None,
            hover: None,
        })
    }

    /// Parse `data` and measure labels with the Skia shaper.
    pub fn from_data(config: ChartConfig, data: &ChartData) -> Result<Self, ChartError> {
        Self::from_data_with(config, data, Box::new(TextShaper::new()))
    }

    pub fn from_data_with(config: ChartConfig, data: &ChartData, metrics: Box<dyn LabelMetrics>) -> Result<Self, ChartError> {
        let parsed = data.parse(&config.x_axis)?;
        Self::from_parts(config, parsed.categories, parsed.series, metrics)
    }

    pub fn config(&self) -> &ChartConfig { &self.config }
    pub fn series(&self) -> &[Series] { &self.series }
    pub fn categories(&self) -> &[CategoryLabel] { &self.categories }
    pub fn x_axis(&self) -> &XAxisScale { &self.x_axis }
    pub fn viewport(&self) -> &Viewport { &self.viewport }
    pub fn layout(&self) -> &ChartLayout { &self.layout }
    /// Snapshot replaced by the last recompute.
    pub fn previous_layout(&self) -> Option<&ChartLayout> { self.previous.as_ref() }
    pub fn hovered(&self) -> Option<usize> { self.hover }

    /// Listeners are called in registration order.
    pub fn add_listener<L: ChartListener + 'static>(&mut self, listener: L) {
        self.listeners.push(Box::new(listener));
    }

    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        if width == self.config.width && height == self.config.height {
            return false;
        }
        let (old_w, old_h) = (self.config.width, self.config.height);
        self.config.width = width;
        self.config.height = height;
        if self.recompute(UpdateCause::Resize, Vec::new()) {
            return true;
        }
        self.config.width = old_w;
        self.config.height = old_h;
        // The rejected pass already refit the axis; fit it back to the kept size.
        if let Ok(layout) = layout_pass(
            &self.config,
            &mut self.x_axis,
            &mut self.y_axis,
            &mut self.viewport,
            &self.series,
            self.metrics.as_ref(),
        ) {
            self.layout = layout;
        }
        false
    }

    pub fn legend_items(&self) -> Vec<LegendItem> {
        self.series
            .iter()
            .map(|s| LegendItem { id: s.id.clone(), name: s.name.clone(), color: s.color.clone(), visible: s.visible })
            .collect()
    }

    /// Flip a series on or off. Returns the new visibility, `None` for an unknown id.
    pub fn toggle_series(&mut self, id: &str) -> Option<bool> {
        let Some(series) = self.series.iter_mut().find(|s| s.id == id) else {
            warn!(id, "toggle of unknown series ignored");
            return None;
        };
        let visible = !series.visible;
        series.set_visible(visible);
        self.recompute(UpdateCause::Legend, vec![ChartEvent::SeriesToggled { id: id.to_string(), visible }]);
        Some(visible)
    }

    /// Press inside the scroll track starts a drag on the handle under it.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        let Some(track) = self.layout.regions.track else { return false };
        if !track.contains(x, y) {
            return false;
        }
        let tx = x - track.left;
        match self.viewport.handle_at(tx) {
            Some(handle) => {
                self.viewport.begin_drag(handle, tx);
                true
            }
            None => false,
        }
    }

    /// Start a drag on a known handle; `x` is in track space.
    pub fn begin_drag(&mut self, handle: DragHandle, x: f32) {
        self.viewport.begin_drag(handle, x);
    }

    /// Continue a drag, or update the hovered category.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        if self.viewport.is_dragging() {
            let track_left = self.layout.regions.track.map_or(self.layout.regions.plot.left, |t| t.left);
            return match self.viewport.drag_to(x - track_left) {
                Some(window) => self.recompute(UpdateCause::Viewport, vec![ChartEvent::ViewportChanged(window)]),
                None => false,
            };
        }
        let next = self.layout.regions.plot.contains(x, y).then(|| self.layout.x.category_index_at(x));
        self.set_hover(next)
    }

    /// Release: commits the drag when it moved the window.
    pub fn pointer_up(&mut self) -> bool {
        match self.viewport.end_drag() {
            Some(window) => {
                self.notify(&[ChartEvent::ViewportCommitted(window)]);
                true
            }
            None => false,
        }
    }

    /// Pointer left the widget: the drag ends as on release and hover clears.
    pub fn pointer_leave(&mut self) -> bool {
        let committed = self.pointer_up();
        self.set_hover(None) || committed
    }

    /// Abort the drag, restoring the window it started from.
    pub fn cancel_drag(&mut self) -> bool {
        match self.viewport.cancel_drag() {
            Some(window) => self.recompute(UpdateCause::Viewport, vec![ChartEvent::ViewportChanged(window)]),
            None => false,
        }
    }

    /// Select a window programmatically, in track pixels.
    pub fn set_viewport(&mut self, left: Option<f32>, right: Option<f32>) -> bool {
        if !self.viewport.is_visible() || !self.viewport.set_window(left, right) {
            return false;
        }
        let window = self.viewport.window();
        self.recompute(UpdateCause::Viewport, vec![ChartEvent::ViewportChanged(window)])
    }

    /// Tooltip for the category nearest to `x`; `None` outside the plot.
    pub fn tooltip_at(&self, x: f32, y: f32) -> Option<Tooltip> {
        if !self.layout.regions.plot.contains(x, y) {
            return None;
        }
        let category = self.layout.x.category_at(x);
        let label = &self.categories.get(category.index)?.tooltip;
        Some(Tooltip::build(&category, label, &self.series, &self.layout.series))
    }

    /// Tooltip for the hovered category, if any.
    pub fn hover_tooltip(&self) -> Option<Tooltip> {
        let category = self.layout.x.category(self.hover?)?;
        let label = &self.categories.get(category.index)?.tooltip;
        Some(Tooltip::build(&category, label, &self.series, &self.layout.series))
    }

    fn set_hover(&mut self, next: Option<usize>) -> bool {
        if next == self.hover {
            return false;
        }
        self.hover = next;
        self.notify(&[ChartEvent::Hover(next)]);
        true
    }

    // Viewport -> x window -> extent -> y range -> geometry, then notify.
    fn recompute(&mut self, cause: UpdateCause, mut events: Vec<ChartEvent>) -> bool {
        let layout = match layout_pass(
            &self.config,
            &mut self.x_axis,
            &mut self.y_axis,
            &mut self.viewport,
            &self.series,
            self.metrics.as_ref(),
        ) {
            Ok(layout) => layout,
            Err(e) => {
                warn!(error = %e, ?cause, "layout pass rejected");
                return false;
            }
        };
        if layout.transition.should_animate() {
            events.push(ChartEvent::AxisRangeChanged(layout.transition));
        }
        events.push(ChartEvent::LayoutUpdated(cause));
        self.previous = Some(std::mem::replace(&mut self.layout, layout));
        if let Some(h) = self.hover {
            if h < self.layout.x.start() || h > self.layout.x.end() {
                self.hover = None;
                events.push(ChartEvent::Hover(None));
            }
        }
        self.notify(&events);
        true
    }

    fn notify(&mut self, events: &[ChartEvent]) {
        for event in events {
            for listener in self.listeners.iter_mut() {
                listener.on_event(event, &self.layout);
            }
        }
    }
}

fn layout_pass(
    config: &ChartConfig,
    x_axis: &mut XAxisScale,
    y_axis: &mut YAxisRange,
    viewport: &mut Viewport,
    series: &[Series],
    metrics: &dyn LabelMetrics,
) -> Result<ChartLayout, ChartError> {
    let (plot_left, plot_width) = Regions::plot_span(config);
    if plot_width <= 0.0 {
        return Err(ChartError::TooSmall { width: config.width, height: config.height });
    }
    x_axis.prepare(plot_left, plot_width, metrics);
    let all_labels_visible = x_axis.all_labels_visible();
    let regions = Regions::compute(config, !all_labels_visible)?;

    viewport.set_visible(!all_labels_visible);
    viewport.resize(regions.plot.width());
    let window = viewport.is_visible().then(|| viewport.window());

    let (start, end) = match window {
        Some(w) => (w.left.map(|l| regions.plot.left + l), w.right.map(|r| regions.plot.left + r)),
        None => (None, None),
    };
    let x = x_axis.update(start, end).ok_or(ChartError::AxisNotPrepared)?;
    let transition = y_axis.update(visible_extent(series, x.start(), x.end()));
    let y = transition.to;
    debug!(start = x.start(), end = x.end(), top = y.top, bottom = y.bottom, "layout pass");

    let geometry = series
        .iter()
        .filter(|s| s.visible)
        .map(|s| SeriesGeometry::build(s, &x, &y, regions.plot))
        .collect();

    let overview = match (regions.track, window, x_axis.full_layout()) {
        (Some(track), Some(window), Some(full)) => {
            Some(build_overview(series, full, track, window, viewport.handle_width(), y_axis.tick_count()))
        }
        _ => None,
    };

    Ok(ChartLayout {
        width: config.width,
        height: config.height,
        y_ticks: y_ticks(&y, regions.plot),
        regions,
        x,
        y,
        transition,
        series: geometry,
        overview,
        viewport: window,
        all_labels_visible,
    })
}

fn build_overview(
    series: &[Series],
    full: &AxisLayout,
    track: RectF,
    window: ViewportWindow,
    handle_width: f32,
    tick_count: usize,
) -> Overview {
    let range = match visible_extent(series, full.start(), full.end()) {
        Some(e) => AxisRange::from_extent(e, tick_count),
        None => AxisRange::fallback(tick_count),
    };
    let lines = series
        .iter()
        .filter(|s| s.visible)
        .map(|s| SeriesGeometry::build(s, full, &range, track))
        .collect();
    let l = track.left + window.left_edge();
    let r = track.left + window.right_edge();
    Overview {
        range,
        series: lines,
        thumb: RectF::from_ltrb(l, track.top, r, track.bottom),
        left_mask: RectF::from_ltrb(track.left, track.top, l, track.bottom),
        right_mask: RectF::from_ltrb(r, track.top, track.right, track.bottom),
        left_handle: RectF::from_ltrb(l, track.top, l + handle_width, track.bottom),
        right_handle: RectF::from_ltrb(r - handle_width, track.top, r, track.bottom),
    }
}
