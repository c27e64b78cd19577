// File: crates/tgchart-core/tests/controller.rs
// Purpose: Chart controller recompute order, listener delivery, legend, tooltip and resize.

use std::cell::RefCell;
use std::rc::Rc;

use tgchart_core::{
    CategoryLabel, Chart, ChartConfig, ChartError, ChartEvent, ChartLayout, ChartListener, DataError, EventLog,
    FixedAdvance, Series, SlideDirection, UpdateCause,
};

// Plot is 300px wide (10px left and 30px right insets); the track sits at y 300..350.
const TRACK_Y: f32 = 325.0;

fn config() -> ChartConfig {
    ChartConfig { width: 340.0, height: 400.0, ..ChartConfig::default() }
}

fn categories(n: usize) -> Vec<CategoryLabel> {
    (0..n).map(|i| CategoryLabel { axis: format!("d{i:02}"), tooltip: format!("Day {i}") }).collect()
}

fn chart(n: usize) -> Chart {
    let tall: Vec<Option<f64>> = (0..n).map(|i| Some(if i < 15 { 900.0 } else { 50.0 })).collect();
    let flat: Vec<Option<f64>> = (0..n).map(|i| if i % 7 == 3 { None } else { Some(20.0) }).collect();
    let series = vec![Series::new("y0", "Tall", "#3DC23F", tall), Series::new("y1", "Flat", "#F34C44", flat)];
    Chart::from_parts(config(), categories(n), series, Box::new(FixedAdvance::default())).unwrap()
}

fn with_log(n: usize) -> (Chart, Rc<RefCell<EventLog>>) {
    let mut c = chart(n);
    let log = Rc::new(RefCell::new(EventLog::new()));
    c.add_listener(log.clone());
    (c, log)
}

#[test]
fn initial_layout_has_track_and_full_window() {
    let c = chart(30);
    let layout = c.layout();
    assert!(!layout.all_labels_visible);
    let track = layout.regions.track.unwrap();
    assert_eq!((track.top, track.bottom), (300.0, 350.0));
    assert_eq!((layout.regions.plot.left, layout.regions.plot.right), (10.0, 310.0));
    assert_eq!((layout.x.start(), layout.x.end()), (0, 29));
    assert_eq!(layout.y.top, 1000.0);
    assert_eq!(layout.series.len(), 2);
    assert!(layout.viewport.unwrap().is_full());
    let overview = layout.overview.as_ref().unwrap();
    assert_eq!(overview.thumb.left, track.left);
    assert_eq!(overview.left_mask.width(), 0.0);
    assert!(c.previous_layout().is_none());
}

#[test]
fn short_domain_hides_the_track() {
    let mut c = chart(5);
    let layout = c.layout();
    assert!(layout.all_labels_visible);
    assert!(layout.regions.track.is_none());
    assert!(layout.overview.is_none());
    assert!(layout.viewport.is_none());
    assert_eq!(layout.x.label_indices(), &[0, 1, 2, 3, 4]);
    assert!(!c.pointer_down(100.0, TRACK_Y));
    assert!(!c.set_viewport(Some(10.0), Some(100.0)));
}

#[test]
fn drag_emits_change_then_range_then_layout() {
    let (mut c, log) = with_log(30);
    assert!(c.pointer_down(10.0, TRACK_Y));
    assert!(c.pointer_move(210.0, TRACK_Y));

    let events = log.borrow_mut().take();
    assert_eq!(events.len(), 3);
    let ChartEvent::ViewportChanged(window) = &events[0] else { panic!("unexpected {:?}", events[0]) };
    assert_eq!((window.left, window.right), (Some(200.0), None));
    let ChartEvent::AxisRangeChanged(t) = &events[1] else { panic!("unexpected {:?}", events[1]) };
    assert_eq!((t.from.unwrap().top, t.to.top), (1000.0, 50.0));
    assert_eq!(t.direction(), Some(SlideDirection::Down));
    assert_eq!(events[2], ChartEvent::LayoutUpdated(UpdateCause::Viewport));

    assert_eq!((c.layout().x.start(), c.layout().x.end()), (20, 29));
    assert_eq!(c.previous_layout().unwrap().y.top, 1000.0);

    assert!(c.pointer_up());
    let events = log.borrow_mut().take();
    assert_eq!(events, vec![ChartEvent::ViewportCommitted(*window)]);
}

#[test]
fn rejected_drag_is_silent() {
    let (mut c, log) = with_log(30);
    assert!(c.set_viewport(Some(100.0), Some(200.0)));
    log.borrow_mut().take();

    // right handle: last handle-width pixels inside the right edge
    assert!(c.pointer_down(10.0 + 198.0, TRACK_Y));
    assert!(!c.pointer_move(10.0 + 130.0, TRACK_Y));
    assert!(!c.pointer_up());
    assert!(log.borrow().events.is_empty());
    assert_eq!(c.viewport().right_position(), Some(200.0));
}

#[test]
fn cancel_restores_window_and_recomputes() {
    let (mut c, log) = with_log(30);
    c.pointer_down(10.0, TRACK_Y);
    c.pointer_move(210.0, TRACK_Y);
    log.borrow_mut().take();

    assert!(c.cancel_drag());
    let events = log.borrow_mut().take();
    assert!(matches!(events.first(), Some(ChartEvent::ViewportChanged(w)) if w.is_full()));
    assert_eq!(events.last(), Some(&ChartEvent::LayoutUpdated(UpdateCause::Viewport)));
    assert_eq!(c.layout().x.start(), 0);
    assert!(!c.pointer_up());
}

struct Tagged {
    tag: &'static str,
    sink: Rc<RefCell<Vec<&'static str>>>,
}

impl ChartListener for Tagged {
    fn on_event(&mut self, _event: &ChartEvent, _layout: &ChartLayout) {
        self.sink.borrow_mut().push(self.tag);
    }
}

#[test]
fn listeners_run_in_registration_order() {
    let mut c = chart(30);
    let sink = Rc::new(RefCell::new(Vec::new()));
    c.add_listener(Tagged { tag: "first", sink: sink.clone() });
    c.add_listener(Tagged { tag: "second", sink: sink.clone() });
    c.toggle_series("y0");
    let seen = sink.borrow();
    assert!(!seen.is_empty());
    assert!(seen.chunks(2).all(|pair| pair == ["first", "second"]));
}

#[test]
fn legend_toggle_hides_series_and_rescales() {
    let (mut c, log) = with_log(30);
    assert_eq!(c.toggle_series("y0"), Some(false));
    let events = log.borrow_mut().take();
    assert_eq!(events[0], ChartEvent::SeriesToggled { id: "y0".into(), visible: false });
    assert!(matches!(events[1], ChartEvent::AxisRangeChanged(_)));
    assert_eq!(events[2], ChartEvent::LayoutUpdated(UpdateCause::Legend));

    let layout = c.layout();
    assert_eq!(layout.series.len(), 1);
    assert_eq!(layout.series[0].id, "y1");
    assert_eq!(layout.y.top, 20.0);
    let items = c.legend_items();
    assert_eq!((items[0].visible, items[1].visible), (false, true));

    assert_eq!(c.toggle_series("y1"), Some(false));
    assert_eq!((c.layout().y.bottom, c.layout().y.top), (0.0, 10.0));
    assert!(c.layout().series.is_empty());
    assert_eq!(c.toggle_series("nope"), None);
}

#[test]
fn tooltip_lists_visible_values_at_nearest_category() {
    let c = chart(30);
    let plot = c.layout().regions.plot;
    assert!(c.tooltip_at(plot.left - 5.0, plot.top + 10.0).is_none());
    assert!(c.tooltip_at(plot.left + 10.0, plot.bottom + 5.0).is_none());

    let x3 = c.layout().x.x_by_index(3).unwrap();
    let tip = c.tooltip_at(x3 + 1.0, plot.top + 20.0).unwrap();
    assert_eq!(tip.index, 3);
    assert_eq!(tip.label, "Day 3");
    assert_eq!(tip.x, x3);
    // y1 has a gap at 3
    assert_eq!(tip.entries.len(), 1);
    assert_eq!((tip.entries[0].id.as_str(), tip.entries[0].text.as_str()), ("y0", "900"));
    assert_eq!(Some(tip.entries[0].y), c.layout().series[0].y_at(3));
}

#[test]
fn hover_follows_pointer_inside_plot() {
    let (mut c, log) = with_log(30);
    let x4 = c.layout().x.x_by_index(4).unwrap();
    assert!(c.pointer_move(x4, 100.0));
    assert_eq!(c.hovered(), Some(4));
    assert!(!c.pointer_move(x4 + 0.5, 100.0));
    assert_eq!(c.hover_tooltip().unwrap().entries.len(), 2);
    assert!(c.pointer_leave());
    assert_eq!(log.borrow_mut().take(), vec![ChartEvent::Hover(Some(4)), ChartEvent::Hover(None)]);
}

#[test]
fn resize_reflows_window_and_rejects_tiny_sizes() {
    let (mut c, log) = with_log(30);
    c.set_viewport(Some(100.0), Some(200.0));
    log.borrow_mut().take();

    assert!(c.resize(640.0, 400.0));
    assert_eq!(c.viewport().left_position(), Some(200.0));
    assert_eq!(c.viewport().right_position(), Some(400.0));
    // every label fits at this width, so the track goes away
    assert!(c.layout().all_labels_visible);
    assert!(c.layout().viewport.is_none());
    assert_eq!(log.borrow_mut().take().last(), Some(&ChartEvent::LayoutUpdated(UpdateCause::Resize)));
    assert!(!c.resize(640.0, 400.0));

    assert!(!c.resize(30.0, 400.0));
    assert_eq!(c.config().width, 640.0);
    assert_eq!(c.layout().width, 640.0);
    assert!(log.borrow().events.is_empty());
}

#[test]
fn construction_validates_series() {
    let dup = vec![Series::with_values("a", &[1.0, 2.0]), Series::with_values("a", &[3.0, 4.0])];
    let err = Chart::from_parts(config(), categories(2), dup, Box::new(FixedAdvance::default())).err();
    assert_eq!(err, Some(ChartError::DuplicateSeries("a".into())));

    let short = vec![Series::with_values("a", &[1.0])];
    let err = Chart::from_parts(config(), categories(2), short, Box::new(FixedAdvance::default())).err();
    assert_eq!(err, Some(ChartError::Data(DataError::LengthMismatch { id: "a".into(), expected: 2, found: 1 })));

    let tiny = ChartConfig { width: 20.0, ..config() };
    let err = Chart::from_parts(tiny, categories(2), Vec::new(), Box::new(FixedAdvance::default())).err();
    assert!(matches!(err, Some(ChartError::TooSmall { .. })));
}
