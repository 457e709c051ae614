//! Alternative scoring: combines criteria weights with per-alternative ratings.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{DecisionMatrix, PriorityVector};
use crate::domain::foundation::{AhpError, ZERO_TOLERANCE};

/// Selects how ratings are turned into alternative scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringStrategy {
    /// Ratings are normalized per alternative and weighted; final
    /// priorities are re-normalized to sum to 1.
    #[default]
    DirectNormalization,
    /// Ratings are ordinal ranks looked up in per-criterion scale vectors.
    SubCriteriaExpansion,
}

impl ScoringStrategy {
    /// Returns the configuration name of this strategy.
    pub fn label(&self) -> &'static str {
        match self {
            ScoringStrategy::DirectNormalization => "direct_normalization",
            ScoringStrategy::SubCriteriaExpansion => "sub_criteria_expansion",
        }
    }
}

impl fmt::Display for ScoringStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A scoring strategy together with the data it needs.
#[derive(Debug, Clone, Copy)]
pub enum AlternativeScorer<'a> {
    DirectNormalization,
    SubCriteriaExpansion { scales: &'a [PriorityVector] },
}

impl<'a> AlternativeScorer<'a> {
    /// Returns the strategy this scorer implements.
    pub fn strategy(&self) -> ScoringStrategy {
        match self {
            AlternativeScorer::DirectNormalization => ScoringStrategy::DirectNormalization,
            AlternativeScorer::SubCriteriaExpansion { .. } => ScoringStrategy::SubCriteriaExpansion,
        }
    }

    /// Scores every alternative, in decision matrix row order.
    ///
    /// # Errors
    /// - `DimensionMismatch` if the weights or scales disagree with the criteria count
    /// - `ZeroRatingSum` / `ZeroTotalScore` for degenerate direct normalization
    /// - `RatingOutOfRange` for ranks outside a criterion's scale
    pub fn score(
        &self,
        matrix: &DecisionMatrix,
        weights: &PriorityVector,
    ) -> Result<Vec<f64>, AhpError> {
        if weights.len() != matrix.criteria_count() {
            return Err(AhpError::dimension_mismatch(
                "criteria weight count",
                matrix.criteria_count(),
                weights.len(),
            ));
        }

        match self {
            AlternativeScorer::DirectNormalization => Self::direct(matrix, weights),
            AlternativeScorer::SubCriteriaExpansion { scales } => {
                Self::expanded(matrix, weights, scales)
            }
        }
    }

    /// score = Σ_j (r[j] / Σ r) · w[j], then divided by the total over all alternatives.
    fn direct(matrix: &DecisionMatrix, weights: &PriorityVector) -> Result<Vec<f64>, AhpError> {
        let w = weights.as_slice();
        let mut scores = Vec::with_capacity(matrix.alternative_count());

        for (alternative, ratings) in matrix.iter() {
            let row_sum: f64 = ratings.iter().sum();
            if row_sum.abs() <= ZERO_TOLERANCE {
                return Err(AhpError::ZeroRatingSum {
                    alternative: alternative.name.clone(),
                });
            }
            let score = ratings
                .iter()
                .zip(w)
                .map(|(rating, weight)| rating / row_sum * weight)
                .sum::<f64>();
            scores.push(score);
        }

        let total: f64 = scores.iter().sum();
        if total.abs() <= ZERO_TOLERANCE {
            return Err(AhpError::ZeroTotalScore);
        }

        Ok(scores.into_iter().map(|s| s / total).collect())
    }

    /// score = Σ_j scale[j][rank − 1] · w[j]; not re-normalized.
    fn expanded(
        matrix: &DecisionMatrix,
        weights: &PriorityVector,
        scales: &[PriorityVector],
    ) -> Result<Vec<f64>, AhpError> {
        if scales.len() != matrix.criteria_count() {
            return Err(AhpError::dimension_mismatch(
                "sub-criteria vector count",
                matrix.criteria_count(),
                scales.len(),
            ));
        }

        let w = weights.as_slice();
        let mut scores = Vec::with_capacity(matrix.alternative_count());

        for (alternative, ratings) in matrix.iter() {
            let mut score = 0.0;
            for (criterion, &rating) in ratings.iter().enumerate() {
                let scale = &scales[criterion];
                let level = Self::rank_position(rating, scale.len()).ok_or_else(|| {
                    AhpError::RatingOutOfRange {
                        alternative: alternative.name.clone(),
                        criterion,
                        rating,
                        max: scale.len(),
                    }
                })?;
                score += scale.as_slice()[level] * w[criterion];
            }
            scores.push(score);
        }

        Ok(scores)
    }

    /// Maps a 1-based integral rank onto a 0-based scale position.
    fn rank_position(rating: f64, scale_size: usize) -> Option<usize> {
        if rating.fract() != 0.0 || rating < 1.0 || rating > scale_size as f64 {
            return None;
        }
        Some(rating as usize - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ahp::SubCriteriaExpander;
    use crate::domain::foundation::{entity_set, Alternative};

    fn matrix(names: Vec<&str>, rows: Vec<Vec<f64>>) -> DecisionMatrix {
        let alternatives: Vec<Alternative> = entity_set(names).unwrap();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        DecisionMatrix::new(&alternatives, width, rows).unwrap()
    }

    fn weights(values: Vec<f64>) -> PriorityVector {
        PriorityVector::from_weights(values).unwrap()
    }

    #[test]
    fn strategy_labels() {
        assert_eq!(ScoringStrategy::default(), ScoringStrategy::DirectNormalization);
        assert_eq!(
            format!("{}", ScoringStrategy::SubCriteriaExpansion),
            "sub_criteria_expansion"
        );
    }

    #[test]
    fn strategy_deserializes_from_snake_case() {
        let strategy: ScoringStrategy =
            serde_json::from_str("\"sub_criteria_expansion\"").unwrap();
        assert_eq!(strategy, ScoringStrategy::SubCriteriaExpansion);
    }

    #[test]
    fn direct_single_alternative_scores_one() {
        // Row [2, 4] normalizes to [1/3, 2/3]; 0.5·1/3 + 0.5·2/3 = 0.5,
        // and as the only alternative its priority is 1.
        let m = matrix(vec!["A"], vec![vec![2.0, 4.0]]);
        let scores = AlternativeScorer::DirectNormalization
            .score(&m, &weights(vec![0.5, 0.5]))
            .unwrap();
        assert!((scores[0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn direct_weighted_row_score_before_renormalization() {
        // Two identical rows each score 0.5 and share the total evenly.
        let m = matrix(vec!["A", "B"], vec![vec![2.0, 4.0], vec![2.0, 4.0]]);
        let scores = AlternativeScorer::DirectNormalization
            .score(&m, &weights(vec![0.5, 0.5]))
            .unwrap();
        assert!((scores[0] - 0.5).abs() < 1e-12);
        assert!((scores[1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn direct_priorities_sum_to_one() {
        let m = matrix(
            vec!["A", "B", "C"],
            vec![vec![5.0, 1.0, 2.0], vec![1.0, 5.0, 1.0], vec![3.0, 3.0, 3.0]],
        );
        let scores = AlternativeScorer::DirectNormalization
            .score(&m, &weights(vec![0.6, 0.3, 0.1]))
            .unwrap();
        let total: f64 = scores.iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert!(scores[0] > scores[1], "A favours the heavy criterion");
    }

    #[test]
    fn direct_zero_row_is_degenerate() {
        let m = matrix(vec!["A", "B"], vec![vec![0.0, 0.0], vec![1.0, 1.0]]);
        let err = AlternativeScorer::DirectNormalization
            .score(&m, &weights(vec![0.5, 0.5]))
            .unwrap_err();
        assert_eq!(
            err,
            AhpError::ZeroRatingSum {
                alternative: "A".to_string()
            }
        );
    }

    #[test]
    fn weight_count_must_match_criteria() {
        let m = matrix(vec!["A"], vec![vec![1.0, 2.0, 3.0]]);
        let err = AlternativeScorer::DirectNormalization
            .score(&m, &weights(vec![0.5, 0.5]))
            .unwrap_err();
        assert_eq!(err, AhpError::dimension_mismatch("criteria weight count", 3, 2));
    }

    #[test]
    fn expanded_looks_up_rank_weights() {
        let scales = SubCriteriaExpander::expand_all(4, 2).unwrap();
        let scorer = AlternativeScorer::SubCriteriaExpansion { scales: &scales };
        let m = matrix(vec!["A", "B"], vec![vec![1.0, 4.0], vec![2.0, 2.0]]);

        let scores = scorer.score(&m, &weights(vec![0.5, 0.5])).unwrap();

        // Scale for K = 4 is [0.48, 0.24, 0.16, 0.12].
        assert!((scores[0] - (0.48 * 0.5 + 0.12 * 0.5)).abs() < 1e-12);
        assert!((scores[1] - (0.24 * 0.5 + 0.24 * 0.5)).abs() < 1e-12);
        assert_eq!(scorer.strategy(), ScoringStrategy::SubCriteriaExpansion);
    }

    #[test]
    fn expanded_scores_are_not_renormalized() {
        let scales = SubCriteriaExpander::expand_all(4, 1).unwrap();
        let scorer = AlternativeScorer::SubCriteriaExpansion { scales: &scales };
        let m = matrix(vec!["A", "B"], vec![vec![1.0], vec![1.0]]);

        let scores = scorer.score(&m, &weights(vec![1.0])).unwrap();
        assert!((scores.iter().sum::<f64>() - 0.96).abs() < 1e-12);
    }

    #[test]
    fn expanded_rejects_rank_above_scale() {
        let scales = SubCriteriaExpander::expand_all(4, 2).unwrap();
        let scorer = AlternativeScorer::SubCriteriaExpansion { scales: &scales };
        let m = matrix(vec!["A"], vec![vec![1.0, 5.0]]);

        let err = scorer.score(&m, &weights(vec![0.5, 0.5])).unwrap_err();
        assert_eq!(
            err,
            AhpError::RatingOutOfRange {
                alternative: "A".to_string(),
                criterion: 1,
                rating: 5.0,
                max: 4
            }
        );
    }

    #[test]
    fn expanded_rejects_zero_and_fractional_ranks() {
        let scales = SubCriteriaExpander::expand_all(4, 1).unwrap();
        let scorer = AlternativeScorer::SubCriteriaExpansion { scales: &scales };
        let w = weights(vec![1.0]);

        let zero = matrix(vec!["A"], vec![vec![0.0]]);
        assert!(matches!(
            scorer.score(&zero, &w).unwrap_err(),
            AhpError::RatingOutOfRange { .. }
        ));

        let fractional = matrix(vec!["A"], vec![vec![2.5]]);
        assert!(matches!(
            scorer.score(&fractional, &w).unwrap_err(),
            AhpError::RatingOutOfRange { .. }
        ));
    }

    #[test]
    fn expanded_requires_one_scale_per_criterion() {
        let scales = SubCriteriaExpander::expand_all(4, 1).unwrap();
        let scorer = AlternativeScorer::SubCriteriaExpansion { scales: &scales };
        let m = matrix(vec!["A"], vec![vec![1.0, 1.0]]);

        let err = scorer.score(&m, &weights(vec![0.5, 0.5])).unwrap_err();
        assert_eq!(err, AhpError::dimension_mismatch("sub-criteria vector count", 2, 1));
    }
}
