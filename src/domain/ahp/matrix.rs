//! Square matrices and validated pairwise comparison matrices.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::AhpError;

/// Tolerance for the unit-diagonal check on pairwise judgments.
const DIAGONAL_TOLERANCE: f64 = 1e-9;

/// An N×N matrix of finite, non-negative reals.
///
/// This is the numeric carrier the normalizer works on. It does not
/// enforce judgment semantics; see [`PairwiseMatrix`] for that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct SquareMatrix {
    rows: Vec<Vec<f64>>,
}

impl SquareMatrix {
    /// Creates a square matrix, checking shape and entry values.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, AhpError> {
        if rows.is_empty() {
            return Err(AhpError::EmptyMatrix);
        }

        let size = rows.len();
        for (row, values) in rows.iter().enumerate() {
            if values.len() != size {
                return Err(AhpError::NotSquare {
                    row,
                    expected: size,
                    actual: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if !value.is_finite() {
                    return Err(AhpError::InvalidJudgment {
                        row,
                        col,
                        value,
                        reason: "entry must be finite",
                    });
                }
                if value < 0.0 {
                    return Err(AhpError::InvalidJudgment {
                        row,
                        col,
                        value,
                        reason: "entry must not be negative",
                    });
                }
            }
        }

        Ok(Self { rows })
    }

    /// Creates an N×N matrix where every entry is 1.
    pub fn ones(size: usize) -> Result<Self, AhpError> {
        Self::new(vec![vec![1.0; size]; size])
    }

    /// Creates a matrix whose entry (row, col) is `f(row, col)`.
    pub fn from_fn(size: usize, f: impl Fn(usize, usize) -> f64) -> Result<Self, AhpError> {
        let rows = (0..size)
            .map(|row| (0..size).map(|col| f(row, col)).collect())
            .collect();
        Self::new(rows)
    }

    /// Returns N.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Returns the entry at (row, col).
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.rows[row][col]
    }

    /// Returns one row.
    pub fn row(&self, row: usize) -> &[f64] {
        &self.rows[row]
    }

    /// Returns all rows.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Sums each column.
    pub fn column_sums(&self) -> Vec<f64> {
        let n = self.size();
        (0..n)
            .map(|col| self.rows.iter().map(|row| row[col]).sum())
            .collect()
    }
}

impl TryFrom<Vec<Vec<f64>>> for SquareMatrix {
    type Error = AhpError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<SquareMatrix> for Vec<Vec<f64>> {
    fn from(matrix: SquareMatrix) -> Self {
        matrix.rows
    }
}

/// A pair of judgments that are not reciprocal to each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReciprocityIssue {
    pub row: usize,
    pub col: usize,
    /// `a(row, col) * a(col, row)`, which is 1 for reciprocal judgments.
    pub product: f64,
}

/// A validated pairwise comparison matrix.
///
/// Entries are strictly positive and the diagonal is 1. Reciprocity
/// (`a(i,j) = 1 / a(j,i)`) is expected but only reported, see
/// [`PairwiseMatrix::reciprocity_issues`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct PairwiseMatrix(SquareMatrix);

impl PairwiseMatrix {
    /// Creates a pairwise matrix from full rows.
    ///
    /// # Errors
    /// - `EmptyMatrix` / `NotSquare` for shape problems
    /// - `InvalidJudgment` for non-finite, non-positive, or off-unit diagonal entries
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, AhpError> {
        let matrix = SquareMatrix::new(rows)?;

        for (row, values) in matrix.rows().iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                if value <= 0.0 {
                    return Err(AhpError::InvalidJudgment {
                        row,
                        col,
                        value,
                        reason: "judgment must be positive",
                    });
                }
                if row == col && (value - 1.0).abs() > DIAGONAL_TOLERANCE {
                    return Err(AhpError::InvalidJudgment {
                        row,
                        col,
                        value,
                        reason: "diagonal judgment must equal 1",
                    });
                }
            }
        }

        Ok(Self(matrix))
    }

    /// Builds a fully reciprocal matrix from its strict upper triangle.
    ///
    /// `judgments` lists a(0,1), a(0,2), .., a(0,n-1), a(1,2), .. row by row;
    /// the lower triangle is filled with reciprocals.
    pub fn from_upper_triangle(size: usize, judgments: &[f64]) -> Result<Self, AhpError> {
        let expected = size * size.saturating_sub(1) / 2;
        if judgments.len() != expected {
            return Err(AhpError::dimension_mismatch(
                "upper triangle judgment count",
                expected,
                judgments.len(),
            ));
        }

        let mut rows = vec![vec![1.0; size]; size];
        let mut next = judgments.iter();
        for row in 0..size {
            for col in (row + 1)..size {
                let value = next.next().copied().unwrap_or(1.0);
                rows[row][col] = value;
                rows[col][row] = if value == 0.0 { 0.0 } else { 1.0 / value };
            }
        }

        Self::new(rows)
    }

    /// Lists upper-triangle pairs whose product deviates from 1 by more than `tolerance`.
    pub fn reciprocity_issues(&self, tolerance: f64) -> Vec<ReciprocityIssue> {
        let n = self.size();
        let mut issues = Vec::new();

        for row in 0..n {
            for col in (row + 1)..n {
                let product = self.0.get(row, col) * self.0.get(col, row);
                if (product - 1.0).abs() > tolerance {
                    issues.push(ReciprocityIssue { row, col, product });
                }
            }
        }

        issues
    }

    /// Returns N.
    pub fn size(&self) -> usize {
        self.0.size()
    }

    /// Returns the entry at (row, col).
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.0.get(row, col)
    }

    /// Returns the underlying numeric matrix.
    pub fn as_square(&self) -> &SquareMatrix {
        &self.0
    }
}

impl TryFrom<Vec<Vec<f64>>> for PairwiseMatrix {
    type Error = AhpError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<PairwiseMatrix> for Vec<Vec<f64>> {
    fn from(matrix: PairwiseMatrix) -> Self {
        matrix.0.into()
    }
}
