// File: crates/tgchart-core/src/config.rs
// Summary: Chart, axis and viewport configuration with widget defaults (serde-loadable).

use serde::Deserialize;

use crate::types::{Insets, HEIGHT, WIDTH};

/// How the x column values are turned into category labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoriesType {
    /// Millisecond timestamps or date strings, formatted as `Jan 5`.
    #[default]
    Date,
    /// Used verbatim.
    String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct XAxisConfig {
    pub categories_type: CategoriesType,
    pub font_size: f32,
    /// Minimum horizontal gap between two drawn labels.
    pub label_margin: f32,
    /// Distance from the plot bottom to the label baseline.
    pub label_margin_top: f32,
    pub show_grid: bool,
}

impl Default for XAxisConfig {
    fn default() -> Self {
        Self {
            categories_type: CategoriesType::Date,
            font_size: 11.0,
            label_margin: 10.0,
            label_margin_top: 15.0,
            show_grid: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct YAxisConfig {
    pub ticks_count: usize,
    pub font_size: f32,
    pub show_grid: bool,
}

impl Default for YAxisConfig {
    fn default() -> Self {
        Self { ticks_count: 5, font_size: 11.0, show_grid: true }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Smallest selectable window, in track pixels.
    pub min_window: f32,
    /// Width of each drag handle drawn at the window edges.
    pub handle_width: f32,
    /// Height of the scroll track strip.
    pub height: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self { min_window: 50.0, handle_width: 5.0, height: 50.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: f32,
    pub height: f32,
    pub title: Option<String>,
    pub title_height: f32,
    pub legend_height: f32,
    pub insets: Insets,
    pub x_axis: XAxisConfig,
    pub y_axis: YAxisConfig,
    pub viewport: ViewportConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: WIDTH as f32,
            height: HEIGHT as f32,
            title: None,
            title_height: 30.0,
            legend_height: 50.0,
            insets: Insets::default(),
            x_axis: XAxisConfig::default(),
            y_axis: YAxisConfig::default(),
            viewport: ViewportConfig::default(),
        }
    }
}

impl ChartConfig {
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}
