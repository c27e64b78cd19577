// File: crates/tgchart-core/src/error.rs
// Summary: Typed errors for input parsing and chart construction.

use thiserror::Error;

/// Problems found while reading the column-oriented input data.
#[derive(Debug, Error, PartialEq)]
pub enum DataError {
    #[error("no category (x) column found among {0} columns")]
    MissingCategoryAxis(usize),
    #[error("column {0} is empty")]
    EmptyColumn(usize),
    #[error("column {0} does not start with a string id")]
    InvalidColumnId(usize),
    #[error("column '{column}' has a non-numeric value at position {index}")]
    InvalidValue { column: String, index: usize },
    #[error("category '{value}' at position {index} is not a valid date")]
    InvalidDate { value: String, index: usize },
    #[error("series '{id}' has {found} values, expected {expected}")]
    LengthMismatch { id: String, expected: usize, found: usize },
    #[error("at least two categories are required, got {0}")]
    TooFewCategories(usize),
    #[error("malformed chart data: {0}")]
    Json(String),
}

impl From<serde_json::Error> for DataError {
    fn from(e: serde_json::Error) -> Self {
        DataError::Json(e.to_string())
    }
}

/// Errors raised while building a [`crate::Chart`].
#[derive(Debug, Error, PartialEq)]
pub enum ChartError {
    #[error(transparent)]
    Data(#[from] DataError),
    #[error("duplicate series id '{0}'")]
    DuplicateSeries(String),
    #[error("chart size {width}x{height} leaves no room for the plot area")]
    TooSmall { width: f32, height: f32 },
    #[error("category axis has not been laid out")]
    AxisNotPrepared,
}
