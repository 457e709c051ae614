//! Rank-based priority vectors for ordinal rating scales.

use super::{MatrixNormalizer, PriorityVector, PriorityVectorDeriver, SquareMatrix};
use crate::domain::foundation::AhpError;

/// Synthesizes sub-criteria priority vectors from rank order alone.
pub struct SubCriteriaExpander;

impl SubCriteriaExpander {
    /// Builds the K×K rank-ratio matrix: entry (row, col) = (col + 1) / (row + 1).
    ///
    /// Rank 1 (row 0) is the most preferred level of the scale.
    pub fn rank_matrix(scale_size: usize) -> Result<SquareMatrix, AhpError> {
        if scale_size == 0 {
            return Err(AhpError::ScaleNotConfigured);
        }
        SquareMatrix::from_fn(scale_size, |row, col| (col + 1) as f64 / (row + 1) as f64)
    }

    /// Derives the priority vector of a K-level ordinal scale.
    pub fn expand(scale_size: usize) -> Result<PriorityVector, AhpError> {
        let matrix = Self::rank_matrix(scale_size)?;
        let normalized = MatrixNormalizer::normalize(&matrix)?;
        Ok(PriorityVectorDeriver::derive(&normalized))
    }

    /// Derives one independent scale vector per ordinal-rated criterion.
    pub fn expand_all(
        scale_size: usize,
        criterion_count: usize,
    ) -> Result<Vec<PriorityVector>, AhpError> {
        (0..criterion_count)
            .map(|_| Self::expand(scale_size))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_matrix_uses_rank_ratios() {
        let matrix = SubCriteriaExpander::rank_matrix(4).unwrap();
        assert_eq!(matrix.get(0, 3), 4.0);
        assert_eq!(matrix.get(3, 0), 0.25);
        assert_eq!(matrix.get(2, 2), 1.0);
        assert!((matrix.get(1, 2) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn expand_four_level_scale() {
        let vector = SubCriteriaExpander::expand(4).unwrap();
        let expected = [0.48, 0.24, 0.16, 0.12];
        for (actual, expected) in vector.as_slice().iter().zip(expected) {
            assert!((actual - expected).abs() < 1e-12, "{} != {}", actual, expected);
        }
        assert!(vector.is_normalized());
    }

    #[test]
    fn expand_is_strictly_decreasing_by_rank() {
        let vector = SubCriteriaExpander::expand(5).unwrap();
        for pair in vector.as_slice().windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }

    #[test]
    fn expand_single_level_scale() {
        let vector = SubCriteriaExpander::expand(1).unwrap();
        assert_eq!(vector.as_slice(), &[1.0]);
    }

    #[test]
    fn expand_zero_scale_is_not_configured() {
        assert_eq!(
            SubCriteriaExpander::expand(0).unwrap_err(),
            AhpError::ScaleNotConfigured
        );
    }

    #[test]
    fn expand_all_builds_one_vector_per_criterion() {
        let vectors = SubCriteriaExpander::expand_all(4, 5).unwrap();
        assert_eq!(vectors.len(), 5);
        assert!(vectors.iter().all(|v| v == &vectors[0]));
    }
}
