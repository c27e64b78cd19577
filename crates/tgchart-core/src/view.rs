// File: crates/tgchart-core/src/view.rs
// Summary: Viewport (scroll box) window state, drag gestures, resize reflow, and min/max over the window.

use tracing::trace;

use crate::config::ViewportConfig;
use crate::scale::Extent;
use crate::series::Series;

// Pans recompute the right edge from the left, which can shave a few ulps off the width.
const WIDTH_TOLERANCE: f32 = 1e-3;

/// Which part of the scroll box a drag grabbed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragHandle {
    Left,
    Right,
    /// The window body: both edges move together.
    Window,
}

/// Selected sub-range of the scroll track, in track pixels.
///
/// `None` on a side means the window is unbounded there (default state).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportWindow {
    pub left: Option<f32>,
    pub right: Option<f32>,
    pub track_width: f32,
}

impl ViewportWindow {
    pub fn full(track_width: f32) -> Self {
        Self { left: None, right: None, track_width: track_width.max(0.0) }
    }

    /// Build a window from edge positions, folding edges at the track bounds
    /// back to `None`.
    pub fn from_edges(left: f32, right: f32, track_width: f32) -> Self {
        Self {
            left: (left > 0.0).then_some(left),
            right: (right < track_width).then_some(right),
            track_width,
        }
    }

    pub fn left_edge(&self) -> f32 { self.left.unwrap_or(0.0) }
    pub fn right_edge(&self) -> f32 { self.right.unwrap_or(self.track_width) }
    pub fn width(&self) -> f32 { self.right_edge() - self.left_edge() }
    pub fn is_full(&self) -> bool { self.left.is_none() && self.right.is_none() }

    /// Same selected fraction on a track of `track_width` pixels.
    pub fn rescaled(&self, track_width: f32) -> Self {
        if self.track_width <= 0.0 {
            return Self::full(track_width);
        }
        let k = track_width / self.track_width;
        Self { left: self.left.map(|l| l * k), right: self.right.map(|r| r * k), track_width }
    }
}

#[derive(Clone, Copy, Debug)]
struct Drag {
    handle: DragHandle,
    origin_x: f32,
    origin: ViewportWindow,
    changed: bool,
}

/// Scroll box model. Positions are in track space (0 = track left edge).
#[derive(Clone, Debug)]
pub struct Viewport {
    window: ViewportWindow,
    min_window: f32,
    handle_width: f32,
    visible: bool,
    drag: Option<Drag>,
}

impl Viewport {
    pub fn new(config: &ViewportConfig) -> Self {
        Self {
            window: ViewportWindow::full(0.0),
            min_window: config.min_window.max(0.0),
            handle_width: config.handle_width.max(0.0),
            visible: true,
            drag: None,
        }
    }

    pub fn window(&self) -> ViewportWindow { self.window }
    pub fn min_window(&self) -> f32 { self.min_window }
    pub fn handle_width(&self) -> f32 { self.handle_width }

    pub fn left_position(&self) -> Option<f32> { self.window.left }
    pub fn right_position(&self) -> Option<f32> { self.window.right }

    pub fn is_visible(&self) -> bool { self.visible }

    /// Hidden when every category already fits; a hidden viewport drops any drag.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        if !visible {
            self.drag = None;
        }
    }

    /// Track width changed: keep the selected fraction. Returns `true` on change.
    pub fn resize(&mut self, track_width: f32) -> bool {
        let track_width = track_width.max(0.0);
        if track_width == self.window.track_width {
            return false;
        }
        self.window = self.window.rescaled(track_width);
        if let Some(drag) = self.drag.as_mut() {
            drag.origin = drag.origin.rescaled(track_width);
        }
        true
    }

    /// Set the window directly (e.g. restoring a saved selection). Rejected when
    /// the edges are out of order or closer than the minimum window.
    pub fn set_window(&mut self, left: Option<f32>, right: Option<f32>) -> bool {
        let w = self.window.track_width;
        let l = left.unwrap_or(0.0).clamp(0.0, w);
        let r = right.unwrap_or(w).clamp(0.0, w);
        if !self.accepts(r - l) {
            return false;
        }
        let next = ViewportWindow::from_edges(l, r, w);
        let changed = next != self.window;
        self.window = next;
        changed
    }

    // The minimum is capped at the track width. A window already narrower
    // than that (after a shrinking resize) may keep its width or grow.
    fn accepts(&self, width: f32) -> bool {
        let min = self.min_window.min(self.window.track_width);
        width >= min || (width > 0.0 && width >= self.window.width() - WIDTH_TOLERANCE)
    }

    /// Handle under a track-space x, following the on-screen layout: handles sit
    /// just inside each window edge.
    pub fn handle_at(&self, x: f32) -> Option<DragHandle> {
        let l = self.window.left_edge();
        let r = self.window.right_edge();
        if x < l || x > r {
            None
        } else if x <= l + self.handle_width {
            Some(DragHandle::Left)
        } else if x >= r - self.handle_width {
            Some(DragHandle::Right)
        } else {
            Some(DragHandle::Window)
        }
    }

    pub fn is_dragging(&self) -> bool { self.drag.is_some() }

    pub fn drag_handle(&self) -> Option<DragHandle> { self.drag.map(|d| d.handle) }

    pub fn begin_drag(&mut self, handle: DragHandle, x: f32) {
        if !self.visible {
            return;
        }
        self.drag = Some(Drag { handle, origin_x: x, origin: self.window, changed: false });
    }

    /// Move the active drag to `x`. Returns the new window when it changed;
    /// constraint violations leave the previous window in place.
    pub fn drag_to(&mut self, x: f32) -> Option<ViewportWindow> {
        let drag = self.drag?;
        let w = self.window.track_width;
        let dx = x - drag.origin_x;
        let (left, right) = (self.window.left_edge(), self.window.right_edge());
        let (l, r) = match drag.handle {
            DragHandle::Left => ((drag.origin.left_edge() + dx).clamp(0.0, w), right),
            DragHandle::Right => (left, (drag.origin.right_edge() + dx).clamp(0.0, w)),
            DragHandle::Window => {
                let width = drag.origin.width();
                let l = (drag.origin.left_edge() + dx).clamp(0.0, (w - width).max(0.0));
                (l, l + width)
            }
        };
        if !self.accepts(r - l) {
            trace!(left = l, right = r, min = self.min_window, "viewport move rejected");
            return None;
        }
        let next = ViewportWindow::from_edges(l, r, w);
        if next == self.window {
            return None;
        }
        self.window = next;
        if let Some(d) = self.drag.as_mut() {
            d.changed = true;
        }
        Some(next)
    }

    /// Finish the drag. Returns the final window if the drag changed anything.
    pub fn end_drag(&mut self) -> Option<ViewportWindow> {
        let drag = self.drag.take()?;
        drag.changed.then_some(self.window)
    }

    /// Abort the drag and restore the window it started from.
    pub fn cancel_drag(&mut self) -> Option<ViewportWindow> {
        let drag = self.drag.take()?;
        if self.window == drag.origin {
            return None;
        }
        self.window = drag.origin;
        Some(self.window)
    }
}

/// Min/max of visible series over category indices `[start, end]`.
/// Gaps are skipped; `None` when nothing is plotted.
pub fn visible_extent(series: &[Series], start: usize, end: usize) -> Option<Extent> {
    let mut extent: Option<Extent> = None;
    for s in series.iter().filter(|s| s.visible) {
        for i in start..=end {
            if let Some(v) = s.value(i) {
                extent = Some(match extent {
                    Some(e) => e.include(v),
                    None => Extent::new(v, v),
                });
            }
        }
    }
    extent
}
