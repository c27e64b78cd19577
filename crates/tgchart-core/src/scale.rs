// File: crates/tgchart-core/src/scale.rs
// Summary: Value (Y) axis auto-ranging: nice bounds, tick step, value->pixel mapping, transition hook.

/// Range used when no visible value exists (all series hidden or all gaps).
pub const FALLBACK_TOP: f64 = 10.0;

/// Min/max of the values currently on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max { Self { min, max } } else { Self { min: max, max: min } }
    }

    pub fn include(self, v: f64) -> Self {
        Self { min: self.min.min(v), max: self.max.max(v) }
    }
}

/// Number of decimal digits of `round(v)` for `v >= 0` (`0` has one digit).
fn digit_count(v: f64) -> i32 {
    format!("{:.0}", v.abs().round()).len() as i32
}

/// Smallest "round" value that is `>= max`.
///
/// The candidate is `10^d` where `d` is the digit count of `round(max)`. When
/// the candidate overshoots `max` by more than a tenth of itself, it is stepped
/// down in units of `10^(d-1)`; single-digit maxima keep `10` as the top.
/// Non-positive maxima are bounded by `0`.
pub fn top_value(max: f64) -> f64 {
    if max < 0.0 {
        return 0.0;
    }
    let d = digit_count(max);
    let candidate = 10f64.powi(d);
    if (candidate - max) / candidate <= 0.1 {
        return candidate;
    }
    let unit = 10f64.powi(d - 1);
    if unit < 10.0 {
        return candidate;
    }
    let stepped = (max / unit).ceil() * unit;
    stepped.clamp(unit, candidate)
}

/// Rounded bottom bound for the visible minimum.
pub fn bottom_value(min: f64) -> f64 {
    if min >= 0.0 {
        let half = 10f64.powi(digit_count(min) - 1) / 2.0;
        if half < 10.0 { 0.0 } else { half }
    } else {
        -top_value(min.abs())
    }
}

/// Pixel height of `y` above the plot bottom for a plot of `height` pixels.
///
/// Negative bottoms shift the scale so it is zero based. Grid lines and
/// series points both go through this function.
pub fn calc_height_by_value(y: f64, top: f64, bottom: f64, height: f32) -> f32 {
    let (mut y, mut top) = (y, top);
    if bottom < 0.0 {
        y += bottom.abs();
        top += bottom.abs();
    }
    if top == 0.0 {
        return 0.0;
    }
    ((y / top) * height as f64) as f32
}

/// Nice bounds and tick step for one recompute.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    pub top: f64,
    pub bottom: f64,
    pub step: f64,
    pub tick_count: usize,
}

impl AxisRange {
    pub fn from_extent(extent: Extent, tick_count: usize) -> Self {
        Self::from_bounds(top_value(extent.max), bottom_value(extent.min), tick_count)
    }

    /// `0..FALLBACK_TOP`, used when nothing is visible.
    pub fn fallback(tick_count: usize) -> Self {
        Self::from_bounds(FALLBACK_TOP, 0.0, tick_count)
    }

    fn from_bounds(top: f64, bottom: f64, tick_count: usize) -> Self {
        let tick_count = tick_count.max(1);
        let step = ((top - bottom).abs() / tick_count as f64).round();
        Self { top, bottom, step, tick_count }
    }

    /// Tick values `bottom, bottom + step, ...` up to and including `top`.
    /// A zero step yields only the bottom tick.
    pub fn ticks(&self) -> Vec<f64> {
        if self.step <= 0.0 || !self.step.is_finite() {
            return vec![self.bottom];
        }
        let mut out = Vec::with_capacity(self.tick_count + 1);
        let mut k = 0u32;
        loop {
            let y = self.bottom + k as f64 * self.step;
            if y > self.top {
                break;
            }
            out.push(y);
            k += 1;
        }
        out
    }

    #[inline]
    pub fn calc_height_by_value(&self, y: f64, height: f32) -> f32 {
        calc_height_by_value(y, self.top, self.bottom, height)
    }

    pub fn contains(&self, extent: Extent) -> bool {
        self.bottom <= extent.min && extent.max <= self.top
    }
}

/// Direction the value labels should slide when bounds change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideDirection {
    /// New top is below the old one: labels move down.
    Down,
    /// New top is at or above the old one.
    Up,
}

/// Old and new bounds of one recompute, for a presentation layer to animate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisTransition {
    pub from: Option<AxisRange>,
    pub to: AxisRange,
}

impl AxisTransition {
    pub fn should_animate(&self) -> bool {
        match self.from {
            Some(from) => from.top != self.to.top || from.bottom != self.to.bottom,
            None => false,
        }
    }

    pub fn direction(&self) -> Option<SlideDirection> {
        if !self.should_animate() {
            return None;
        }
        let from = self.from?;
        Some(if from.top > self.to.top { SlideDirection::Down } else { SlideDirection::Up })
    }
}

/// Y axis state across recomputes; only the last range is remembered.
#[derive(Clone, Debug)]
pub struct YAxisRange {
    tick_count: usize,
    current: Option<AxisRange>,
}

impl YAxisRange {
    pub fn new(tick_count: usize) -> Self {
        Self { tick_count: tick_count.max(1), current: None }
    }

    pub fn current(&self) -> Option<AxisRange> { self.current }

    pub fn tick_count(&self) -> usize { self.tick_count }

    /// Derive a fresh range from the visible extent and report the change.
    pub fn update(&mut self, extent: Option<Extent>) -> AxisTransition {
        let to = match extent {
            Some(e) => AxisRange::from_extent(e, self.tick_count),
            None => AxisRange::fallback(self.tick_count),
        };
        let from = self.current.replace(to);
        AxisTransition { from, to }
    }
}
