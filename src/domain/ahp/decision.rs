//! Decision matrix: alternatives (rows) rated on criteria (columns).

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AhpError, Alternative, Criterion};
use crate::ports::TabularDataset;

/// Ratings of each alternative on each criterion.
///
/// Every rating is finite and non-negative, and every row has one rating
/// per criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DecisionMatrixData")]
pub struct DecisionMatrix {
    alternatives: Vec<Alternative>,
    criteria_count: usize,
    ratings: Vec<Vec<f64>>,
}

/// Unchecked serialized form of a [`DecisionMatrix`].
#[derive(Deserialize)]
struct DecisionMatrixData {
    alternatives: Vec<Alternative>,
    criteria_count: usize,
    ratings: Vec<Vec<f64>>,
}

impl TryFrom<DecisionMatrixData> for DecisionMatrix {
    type Error = AhpError;

    fn try_from(data: DecisionMatrixData) -> Result<Self, Self::Error> {
        Self::new(&data.alternatives, data.criteria_count, data.ratings)
    }
}

impl DecisionMatrix {
    /// Creates a decision matrix from rating rows in alternative order.
    ///
    /// # Errors
    /// - `DimensionMismatch` if the row count differs from the alternative
    ///   count or a row's width differs from `criteria_count`
    /// - `InvalidRating` for a negative or non-finite rating
    pub fn new(
        alternatives: &[Alternative],
        criteria_count: usize,
        ratings: Vec<Vec<f64>>,
    ) -> Result<Self, AhpError> {
        if ratings.len() != alternatives.len() {
            return Err(AhpError::dimension_mismatch(
                "decision matrix row count",
                alternatives.len(),
                ratings.len(),
            ));
        }
        if let Some(row) = ratings.iter().find(|row| row.len() != criteria_count) {
            return Err(AhpError::dimension_mismatch(
                "decision matrix column count",
                criteria_count,
                row.len(),
            ));
        }
        for (alternative, row) in alternatives.iter().zip(&ratings) {
            if let Some((criterion, &rating)) = row
                .iter()
                .enumerate()
                .find(|(_, r)| !r.is_finite() || **r < 0.0)
            {
                return Err(AhpError::InvalidRating {
                    alternative: alternative.name.clone(),
                    criterion,
                    rating,
                });
            }
        }

        Ok(Self {
            alternatives: alternatives.to_vec(),
            criteria_count,
            ratings,
        })
    }

    /// Extracts ratings from a dataset.
    ///
    /// Every column except `id_column` is a rating column, taken in dataset
    /// order; there must be exactly one per criterion. Row `i` must belong
    /// to alternative `i`.
    ///
    /// # Errors
    /// - `MissingColumn` if `id_column` is absent
    /// - `DimensionMismatch` for rating column or row count disagreements
    /// - `AlternativeMismatch` if a row's identifier differs from the alternative
    /// - `NonNumericCell` if a rating cell is missing or not a number
    /// - `InvalidRating` if a numeric cell is negative or not finite
    pub fn from_dataset(
        dataset: &dyn TabularDataset,
        id_column: &str,
        criteria: &[Criterion],
        alternatives: &[Alternative],
    ) -> Result<Self, AhpError> {
        let columns = dataset.column_names();
        if !columns.iter().any(|c| c == id_column) {
            return Err(AhpError::MissingColumn {
                column: id_column.to_string(),
            });
        }

        let rating_columns: Vec<&String> = columns.iter().filter(|c| *c != id_column).collect();
        if rating_columns.len() != criteria.len() {
            return Err(AhpError::dimension_mismatch(
                "dataset rating column count",
                criteria.len(),
                rating_columns.len(),
            ));
        }
        if dataset.row_count() != alternatives.len() {
            return Err(AhpError::dimension_mismatch(
                "dataset row count",
                alternatives.len(),
                dataset.row_count(),
            ));
        }

        let mut ratings = Vec::with_capacity(alternatives.len());
        for alternative in alternatives {
            let row = alternative.index;
            if let Some(label) = dataset.cell(row, id_column) {
                let label = label.to_string();
                if label != alternative.name {
                    return Err(AhpError::AlternativeMismatch {
                        row,
                        expected: alternative.name.clone(),
                        actual: label,
                    });
                }
            }

            let values = rating_columns
                .iter()
                .map(|column| {
                    dataset
                        .cell(row, column)
                        .and_then(|cell| cell.as_number())
                        .ok_or_else(|| AhpError::NonNumericCell {
                            row,
                            column: column.to_string(),
                        })
                })
                .collect::<Result<Vec<f64>, AhpError>>()?;
            ratings.push(values);
        }

        Self::new(alternatives, criteria.len(), ratings)
    }

    /// Returns the alternatives in row order.
    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }

    pub fn criteria_count(&self) -> usize {
        self.criteria_count
    }

    /// Returns the ratings of one alternative.
    pub fn row(&self, index: usize) -> &[f64] {
        &self.ratings[index]
    }

    /// Iterates over (alternative, ratings) pairs in row order.
    pub fn iter(&self) -> impl Iterator<Item = (&Alternative, &[f64])> {
        self.alternatives
            .iter()
            .zip(self.ratings.iter().map(Vec::as_slice))
    }
}
