//! In-memory tabular dataset.
//!
//! Holds an already-parsed table so the engine can be driven without any
//! file or database access. Callers that parse CSV or spreadsheets load
//! the result into this type.

use std::collections::HashMap;

use crate::domain::foundation::AhpError;
use crate::ports::{CellValue, TabularDataset};

/// Row-major table with named columns.
///
/// # Example
///
/// ```ignore
/// let dataset = InMemoryDataset::builder()
///     .columns(vec!["skill", "salary", "demand"])
///     .row(vec!["backend".into(), 3.into(), 1.into()])
///     .build()?;
///
/// assert_eq!(dataset.row_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemoryDataset {
    columns: Vec<String>,
    positions: HashMap<String, usize>,
    rows: Vec<Vec<CellValue>>,
}

impl InMemoryDataset {
    /// Creates a builder for constructing a dataset.
    pub fn builder() -> InMemoryDatasetBuilder {
        InMemoryDatasetBuilder::default()
    }

    /// Creates a dataset from columns and rows.
    ///
    /// # Errors
    /// - `EmptyName` / `DuplicateName` for bad column names
    /// - `DimensionMismatch` if a row's width differs from the column count
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Result<Self, AhpError> {
        let mut positions = HashMap::new();
        for (index, column) in columns.iter().enumerate() {
            if column.trim().is_empty() {
                return Err(AhpError::EmptyName { kind: "column" });
            }
            if positions.insert(column.clone(), index).is_some() {
                return Err(AhpError::DuplicateName {
                    kind: "column",
                    name: column.clone(),
                });
            }
        }

        if let Some(row) = rows.iter().find(|row| row.len() != columns.len()) {
            return Err(AhpError::dimension_mismatch(
                "dataset row width",
                columns.len(),
                row.len(),
            ));
        }

        Ok(Self {
            columns,
            positions,
            rows,
        })
    }

    /// Returns true if the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl TabularDataset for InMemoryDataset {
    fn column_names(&self) -> &[String] {
        &self.columns
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn cell(&self, row: usize, column: &str) -> Option<&CellValue> {
        let position = *self.positions.get(column)?;
        self.rows.get(row)?.get(position)
    }
}

/// Builder for constructing InMemoryDataset instances.
#[derive(Debug, Default)]
pub struct InMemoryDatasetBuilder {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl InMemoryDatasetBuilder {
    /// Sets the column names.
    pub fn columns(mut self, names: Vec<impl Into<String>>) -> Self {
        self.columns = names.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Appends a row of cells.
    pub fn row(mut self, cells: Vec<CellValue>) -> Self {
        self.rows.push(cells);
        self
    }

    /// Appends a labelled row of numeric ratings.
    pub fn rated(mut self, label: impl Into<String>, ratings: &[f64]) -> Self {
        let mut cells = Vec::with_capacity(ratings.len() + 1);
        cells.push(CellValue::Text(label.into()));
        cells.extend(ratings.iter().map(|r| CellValue::Number(*r)));
        self.rows.push(cells);
        self
    }

    /// Builds the dataset.
    pub fn build(self) -> Result<InMemoryDataset, AhpError> {
        InMemoryDataset::new(self.columns, self.rows)
    }
}
