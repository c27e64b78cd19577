// File: crates/tgchart-core/src/lib.rs
// Summary: Core library entry point; exports the line chart engine, its layout snapshots and renderers.

pub mod axis;
pub mod chart;
pub mod config;
pub mod data;
pub mod error;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod listener;
pub mod render;
pub mod scale;
pub mod series;
pub mod text;
pub mod theme;
pub mod tooltip;
pub mod types;
pub mod view;

pub use axis::{AxisLabel, AxisLayout, Category, XAxisScale};
pub use chart::{Chart, ChartLayout, LegendItem, Overview, Regions};
pub use config::{CategoriesType, ChartConfig, ViewportConfig, XAxisConfig, YAxisConfig};
pub use data::{CategoryLabel, ChartData, ParsedData};
pub use error::{ChartError, DataError};
pub use geometry::{Point, RectF, SeriesGeometry};
pub use grid::YTick;
pub use listener::{ChartEvent, ChartListener, EventLog, UpdateCause};
pub use render::RenderOptions;
pub use scale::{AxisRange, AxisTransition, Extent, SlideDirection, YAxisRange};
pub use series::{Series, SeriesType};
pub use text::{FixedAdvance, LabelMetrics, TextShaper};
pub use theme::Theme;
pub use tooltip::{Tooltip, TooltipEntry};
pub use view::{visible_extent, DragHandle, Viewport, ViewportWindow};
