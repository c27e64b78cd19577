// File: crates/tgchart-core/src/tooltip.rs
// Summary: Tooltip content for a hovered category: label plus per-series values and point positions.

use crate::axis::Category;
use crate::format::format_value;
use crate::geometry::SeriesGeometry;
use crate::series::Series;

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipEntry {
    pub id: String,
    pub name: String,
    pub color: String,
    pub value: f64,
    pub text: String,
    /// Pixel y of the hover circle.
    pub y: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub index: usize,
    /// Pixel x of the crosshair.
    pub x: f32,
    pub label: String,
    pub entries: Vec<TooltipEntry>,
}

impl Tooltip {
    /// Collect values of visible series at `category`. Series with a gap there
    /// are left out.
    pub fn build(category: &Category, label: &str, series: &[Series], geometry: &[SeriesGeometry]) -> Self {
        let entries = series
            .iter()
            .filter(|s| s.visible)
            .filter_map(|s| {
                let value = s.value(category.index)?;
                let y = geometry.iter().find(|g| g.id == s.id)?.y_at(category.index)?;
                Some(TooltipEntry {
                    id: s.id.clone(),
                    name: s.name.clone(),
                    color: s.color.clone(),
                    value,
                    text: format_value(value),
                    y,
                })
            })
            .collect();
        Self { index: category.index, x: category.x, label: label.to_string(), entries }
    }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}
