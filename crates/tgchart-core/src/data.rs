// File: crates/tgchart-core/src/data.rs
// Summary: Column-oriented input contract ([id, v1, v2, ...] plus types/names/colors tables).

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::config::{CategoriesType, XAxisConfig};
use crate::error::DataError;
use crate::format::{date_from_millis, format_axis_date, format_tooltip_date, parse_date};
use crate::series::{Series, SeriesType};

/// Colors handed out to series that come without one.
pub const PALETTE: [&str; 8] = [
    "#3DC23F", "#F34C44", "#3497ED", "#F5BD25", "#9ED448", "#5FB641", "#E65850", "#64ADED",
];

/// Raw chart input as published with the contest data set.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ChartData {
    pub columns: Vec<Vec<Value>>,
    #[serde(default)]
    pub types: HashMap<String, String>,
    #[serde(default)]
    pub names: HashMap<String, String>,
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

/// Display strings of one category.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryLabel {
    /// Under the X axis.
    pub axis: String,
    /// In the tooltip header.
    pub tooltip: String,
}

impl CategoryLabel {
    pub fn plain(s: impl Into<String>) -> Self {
        let s = s.into();
        Self { axis: s.clone(), tooltip: s }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParsedData {
    pub categories: Vec<CategoryLabel>,
    pub series: Vec<Series>,
}

impl ChartData {
    pub fn from_json(s: &str) -> Result<Self, DataError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Parse every chart of a contest file (a JSON array of chart objects).
    pub fn many_from_json(s: &str) -> Result<Vec<Self>, DataError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Split columns into category labels and line series.
    ///
    /// The first `x` column becomes the category axis. Columns with an unknown
    /// type are skipped with a warning.
    pub fn parse(&self, config: &XAxisConfig) -> Result<ParsedData, DataError> {
        let mut categories: Option<Vec<CategoryLabel>> = None;
        let mut series = Vec::new();

        for (ci, column) in self.columns.iter().enumerate() {
            let (head, values) = column.split_first().ok_or(DataError::EmptyColumn(ci))?;
            let id = head.as_str().filter(|s| !s.is_empty()).ok_or(DataError::InvalidColumnId(ci))?;
            match self.types.get(id).map(String::as_str) {
                Some("x") if categories.is_none() => {
                    categories = Some(parse_categories(values, config.categories_type)?);
                }
                Some("x") => warn!(column = id, "second x column ignored"),
                Some(tag) => match SeriesType::from_tag(tag) {
                    Some(series_type) => {
                        let mut s = Series::new(
                            id,
                            self.name_of(id),
                            self.color_of(id, series.len()),
                            parse_values(id, values)?,
                        );
                        s.series_type = series_type;
                        series.push(s);
                    }
                    None => warn!(column = id, series_type = tag, "unsupported series type, column skipped"),
                },
                None => warn!(column = id, "column has no type, skipped"),
            }
        }

        let categories = categories.ok_or(DataError::MissingCategoryAxis(self.columns.len()))?;
        if categories.len() < 2 {
            return Err(DataError::TooFewCategories(categories.len()));
        }
        for s in &series {
            if s.len() != categories.len() {
                return Err(DataError::LengthMismatch { id: s.id.clone(), expected: categories.len(), found: s.len() });
            }
        }
        Ok(ParsedData { categories, series })
    }

    fn name_of(&self, id: &str) -> String {
        self.names.get(id).cloned().unwrap_or_else(|| id.to_string())
    }

    fn color_of(&self, id: &str, position: usize) -> String {
        match self.colors.get(id) {
            Some(c) => c.clone(),
            None => {
                let c = PALETTE[position % PALETTE.len()];
                warn!(column = id, color = c, "no color given, using palette");
                c.to_string()
            }
        }
    }
}

fn parse_categories(values: &[Value], kind: CategoriesType) -> Result<Vec<CategoryLabel>, DataError> {
    values
        .iter()
        .enumerate()
        .map(|(index, v)| match kind {
            CategoriesType::Date => {
                let date = match v {
                    Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)).and_then(date_from_millis),
                    Value::String(s) => parse_date(s),
                    _ => None,
                };
                date.map(|d| CategoryLabel { axis: format_axis_date(d), tooltip: format_tooltip_date(d) })
                    .ok_or_else(|| DataError::InvalidDate { value: v.to_string(), index })
            }
            CategoriesType::String => match v {
                Value::String(s) => Ok(CategoryLabel::plain(s.as_str())),
                Value::Number(n) => Ok(CategoryLabel::plain(n.to_string())),
                _ => Err(DataError::InvalidValue { column: String::from("x"), index }),
            },
        })
        .collect()
}

fn parse_values(id: &str, values: &[Value]) -> Result<Vec<Option<f64>>, DataError> {
    values
        .iter()
        .enumerate()
        .map(|(index, v)| match v {
            Value::Null => Ok(None),
            Value::Number(n) => Ok(n.as_f64()),
            Value::String(s) => s
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|_| DataError::InvalidValue { column: id.to_string(), index }),
            _ => Err(DataError::InvalidValue { column: id.to_string(), index }),
        })
        .collect()
}
