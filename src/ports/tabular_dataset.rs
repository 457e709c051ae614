//! Tabular dataset port.
//!
//! Defines the read-only contract the engine needs from a loaded dataset.
//! Parsing files into a dataset is the caller's concern.
//!
//! # Shape contract
//!
//! - One column identifies the alternative on each row
//! - Every other column holds numeric ratings, in criterion order

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single dataset cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Returns the numeric value, if this cell is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(_) => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Number(f64::from(value))
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

/// Read port over a rectangular, column-named dataset.
pub trait TabularDataset: Send + Sync {
    /// Column names in dataset order.
    fn column_names(&self) -> &[String];

    /// Number of data rows.
    fn row_count(&self) -> usize;

    /// Cell at `row` in the named column.
    ///
    /// Returns `None` if the row or column does not exist.
    fn cell(&self, row: usize, column: &str) -> Option<&CellValue>;
}
