// File: crates/tgchart-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings).

use serde::Deserialize;

/// Default chart width in pixels.
pub const WIDTH: i32 = 640;
/// Default chart height in pixels.
pub const HEIGHT: i32 = 400;

/// Screen margins around the plot, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f32 { self.left + self.right }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(10.0, 30.0, 10.0, 0.0)
    }
}
