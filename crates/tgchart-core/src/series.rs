// File: crates/tgchart-core/src/series.rs
// Summary: Line series model: one value slot per category, gaps as None.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Line,
}

impl SeriesType {
    /// Map the input `types` table entry to a series type. `x` is the category column.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "line" => Some(Self::Line),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub id: String,
    pub name: String,
    /// CSS-style color, e.g. `#3DC23F`.
    pub color: String,
    pub series_type: SeriesType,
    data: Vec<Option<f64>>, // aligned 1:1 with categories, never mutated
    pub visible: bool,
}

impl Series {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>, data: Vec<Option<f64>>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            series_type: SeriesType::Line,
            data,
            visible: true,
        }
    }

    /// Convenience for dense data without gaps.
    pub fn with_values(id: impl Into<String>, values: &[f64]) -> Self {
        let id = id.into();
        Self::new(id.clone(), id, "#3DC23F", values.iter().copied().map(Some).collect())
    }

    pub fn data(&self) -> &[Option<f64>] { &self.data }

    pub fn len(&self) -> usize { self.data.len() }

    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    /// Finite value at `index`; gaps, NaN and out-of-range indices are `None`.
    #[inline]
    pub fn value(&self, index: usize) -> Option<f64> {
        self.data.get(index).copied().flatten().filter(|v| v.is_finite())
    }

    pub fn set_visible(&mut self, visible: bool) { self.visible = visible; }
}
