//! Column-sum normalization of a square judgment matrix.

use serde::{Deserialize, Serialize};

use super::SquareMatrix;
use crate::domain::foundation::{AhpError, ZERO_TOLERANCE};

/// A square matrix whose columns each sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedMatrix(SquareMatrix);

impl NormalizedMatrix {
    /// Returns N.
    pub fn size(&self) -> usize {
        self.0.size()
    }

    /// Returns the entry at (row, col).
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.0.get(row, col)
    }

    /// Returns one row.
    pub fn row(&self, row: usize) -> &[f64] {
        self.0.row(row)
    }

    /// Returns all rows.
    pub fn rows(&self) -> &[Vec<f64>] {
        self.0.rows()
    }

    /// Sums each column (each is 1 up to rounding).
    pub fn column_sums(&self) -> Vec<f64> {
        self.0.column_sums()
    }
}

/// Normalizes a matrix by dividing each entry by its column total.
pub struct MatrixNormalizer;

impl MatrixNormalizer {
    /// Divides every entry by the sum of its column.
    ///
    /// # Errors
    /// - `ZeroColumnSum` if any column totals zero
    pub fn normalize(matrix: &SquareMatrix) -> Result<NormalizedMatrix, AhpError> {
        let sums = matrix.column_sums();

        if let Some(column) = sums.iter().position(|sum| sum.abs() <= ZERO_TOLERANCE) {
            return Err(AhpError::ZeroColumnSum { column });
        }

        let normalized = SquareMatrix::from_fn(matrix.size(), |row, col| {
            matrix.get(row, col) / sums[col]
        })?;

        Ok(NormalizedMatrix(normalized))
    }
}
