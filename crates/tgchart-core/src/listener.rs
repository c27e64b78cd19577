// File: crates/tgchart-core/src/listener.rs
// Summary: Typed change notifications delivered to chart listeners in registration order.

use std::cell::RefCell;
use std::rc::Rc;

use crate::chart::ChartLayout;
use crate::scale::AxisTransition;
use crate::view::ViewportWindow;

/// What triggered a full recompute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateCause {
    Resize,
    Viewport,
    Legend,
}

/// Events emitted by [`crate::Chart`]. Within one input, events arrive in the
/// order they are listed here.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartEvent {
    /// The scroll box window moved (drag step, cancel, or programmatic set).
    ViewportChanged(ViewportWindow),
    /// A drag that changed the window was released.
    ViewportCommitted(ViewportWindow),
    SeriesToggled { id: String, visible: bool },
    /// Y bounds differ from the previous pass; `transition` carries both.
    AxisRangeChanged(AxisTransition),
    /// Layout snapshot replaced.
    LayoutUpdated(UpdateCause),
    /// Hovered category changed (`None` when the pointer left the plot).
    Hover(Option<usize>),
}

/// Receives chart events together with the layout current at delivery time.
pub trait ChartListener {
    fn on_event(&mut self, event: &ChartEvent, layout: &ChartLayout);
}

// Allow sharing a single listener between the chart and its owner
impl<L: ChartListener> ChartListener for Rc<RefCell<L>> {
    fn on_event(&mut self, event: &ChartEvent, layout: &ChartLayout) {
        self.borrow_mut().on_event(event, layout)
    }
}

/// Listener that records every event it sees.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    pub events: Vec<ChartEvent>,
}

impl EventLog {
    pub fn new() -> Self { Self::default() }

    pub fn take(&mut self) -> Vec<ChartEvent> { std::mem::take(&mut self.events) }
}

impl ChartListener for EventLog {
    fn on_event(&mut self, event: &ChartEvent, _layout: &ChartLayout) {
        self.events.push(event.clone());
    }
}
