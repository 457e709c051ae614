//! Priority vectors and their row-average derivation.

use serde::{Deserialize, Serialize};

use super::NormalizedMatrix;
use crate::domain::foundation::{AhpError, SUM_TOLERANCE};

/// An ordered weight vector; entries are non-negative and sum to 1.
///
/// Used both for criteria weights and for sub-criteria rating scales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct PriorityVector(Vec<f64>);

impl PriorityVector {
    /// Wraps caller-supplied weights, checking the weight-vector invariant.
    ///
    /// # Errors
    /// - `NotNormalized` if any weight is negative or the sum is not 1
    pub fn from_weights(weights: Vec<f64>) -> Result<Self, AhpError> {
        let vector = Self(weights);
        if !vector.is_normalized() {
            return Err(AhpError::NotNormalized { sum: vector.sum() });
        }
        Ok(vector)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the vector has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the entry at `index`, if present.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    /// Returns the entries in order.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Returns the sum of all entries.
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Checks the weight-vector invariant: non-negative entries summing to 1.
    pub fn is_normalized(&self) -> bool {
        self.0.iter().all(|w| *w >= 0.0) && (self.sum() - 1.0).abs() <= SUM_TOLERANCE
    }
}

impl TryFrom<Vec<f64>> for PriorityVector {
    type Error = AhpError;

    fn try_from(weights: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_weights(weights)
    }
}

impl From<PriorityVector> for Vec<f64> {
    fn from(vector: PriorityVector) -> Self {
        vector.0
    }
}

/// Reduces a normalized matrix to its priority vector.
pub struct PriorityVectorDeriver;

impl PriorityVectorDeriver {
    /// Averages each row of the normalized matrix.
    ///
    /// This is the classical row-average approximation of the principal
    /// eigenvector. The result sums to 1 because each column of the input does.
    pub fn derive(matrix: &NormalizedMatrix) -> PriorityVector {
        let n = matrix.size() as f64;
        let weights = matrix
            .rows()
            .iter()
            .map(|row| row.iter().sum::<f64>() / n)
            .collect();

        PriorityVector(weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ahp::{MatrixNormalizer, SquareMatrix};

    fn derive(rows: Vec<Vec<f64>>) -> PriorityVector {
        let matrix = SquareMatrix::new(rows).unwrap();
        PriorityVectorDeriver::derive(&MatrixNormalizer::normalize(&matrix).unwrap())
    }

    #[test]
    fn derive_uniform_for_all_ones() {
        let weights = derive(vec![vec![1.0; 5]; 5]);
        assert_eq!(weights.len(), 5);
        for w in weights.as_slice() {
            assert!((w - 0.2).abs() < 1e-12);
        }
    }

    #[test]
    fn derive_consistent_two_by_two() {
        // A is three times as important as B.
        let weights = derive(vec![vec![1.0, 3.0], vec![1.0 / 3.0, 1.0]]);
        assert!((weights.get(0).unwrap() - 0.75).abs() < 1e-12);
        assert!((weights.get(1).unwrap() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn derive_result_is_normalized() {
        let weights = derive(vec![
            vec![1.0, 5.0, 3.0],
            vec![0.2, 1.0, 0.5],
            vec![1.0 / 3.0, 2.0, 1.0],
        ]);
        assert!(weights.is_normalized(), "sum was {}", weights.sum());
    }

    #[test]
    fn from_weights_accepts_normalized() {
        let weights = PriorityVector::from_weights(vec![0.3, 0.5, 0.2]).unwrap();
        assert_eq!(weights.len(), 3);
    }

    #[test]
    fn from_weights_rejects_bad_sum() {
        let err = PriorityVector::from_weights(vec![0.3, 0.3]).unwrap_err();
        assert!(matches!(err, AhpError::NotNormalized { .. }));
    }

    #[test]
    fn from_weights_rejects_negative_entry() {
        assert!(PriorityVector::from_weights(vec![1.5, -0.5]).is_err());
    }

    #[test]
    fn get_out_of_bounds_is_none() {
        let weights = derive(vec![vec![1.0]]);
        assert_eq!(weights.get(0), Some(1.0));
        assert_eq!(weights.get(1), None);
    }

    #[test]
    fn priority_vector_serializes_as_array() {
        let weights = derive(vec![vec![1.0, 1.0], vec![1.0, 1.0]]);
        assert_eq!(serde_json::to_string(&weights).unwrap(), "[0.5,0.5]");
    }

    #[test]
    fn priority_vector_deserializes_valid_weights() {
        let weights: PriorityVector = serde_json::from_str("[0.25,0.75]").unwrap();
        assert_eq!(weights.as_slice(), &[0.25, 0.75]);
    }

    #[test]
    fn priority_vector_deserialization_checks_invariant() {
        assert!(serde_json::from_str::<PriorityVector>("[0.4,0.4]").is_err());
        assert!(serde_json::from_str::<PriorityVector>("[1.5,-0.5]").is_err());
    }
}
