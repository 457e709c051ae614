//! Property tests for the AHP computations.
//!
//! Random reciprocal matrices are built from Saaty-scale judgments so every
//! generated input is a valid pairwise matrix.

use proptest::prelude::*;
use proptest::sample::select;

use ahp_engine::domain::ahp::{
    AlternativeScorer, ConsistencyChecker, DecisionMatrix, MatrixNormalizer, PairwiseMatrix,
    PriorityVectorDeriver, Ranker,
};
use ahp_engine::domain::foundation::{entity_set, Alternative, Criterion};

const SAATY_SCALE: [f64; 17] = [
    1.0 / 9.0,
    1.0 / 8.0,
    1.0 / 7.0,
    1.0 / 6.0,
    1.0 / 5.0,
    1.0 / 4.0,
    1.0 / 3.0,
    1.0 / 2.0,
    1.0,
    2.0,
    3.0,
    4.0,
    5.0,
    6.0,
    7.0,
    8.0,
    9.0,
];

fn reciprocal_matrix() -> impl Strategy<Value = PairwiseMatrix> {
    (2usize..=10).prop_flat_map(|size| {
        prop::collection::vec(select(SAATY_SCALE.to_vec()), size * (size - 1) / 2).prop_map(
            move |judgments| {
                PairwiseMatrix::from_upper_triangle(size, &judgments)
                    .expect("Saaty judgments form a valid matrix")
            },
        )
    })
}

fn criteria(count: usize) -> Vec<Criterion> {
    entity_set((0..count).map(|i| format!("c{}", i))).unwrap()
}

proptest! {
    #[test]
    fn normalized_columns_sum_to_one(matrix in reciprocal_matrix()) {
        let normalized = MatrixNormalizer::normalize(matrix.as_square()).unwrap();
        for sum in normalized.column_sums() {
            prop_assert!((sum - 1.0).abs() < 1e-9, "column sum {}", sum);
        }
    }

    #[test]
    fn weights_are_a_distribution(matrix in reciprocal_matrix()) {
        let normalized = MatrixNormalizer::normalize(matrix.as_square()).unwrap();
        let weights = PriorityVectorDeriver::derive(&normalized);

        prop_assert_eq!(weights.len(), matrix.size());
        prop_assert!((weights.sum() - 1.0).abs() < 1e-9);
        prop_assert!(weights.as_slice().iter().all(|w| *w > 0.0));
    }

    #[test]
    fn consistency_index_is_never_negative(matrix in reciprocal_matrix()) {
        let normalized = MatrixNormalizer::normalize(matrix.as_square()).unwrap();
        let weights = PriorityVectorDeriver::derive(&normalized);

        let report = ConsistencyChecker::default().check(&matrix, &weights).unwrap();
        prop_assert!(report.lambda_max >= matrix.size() as f64 - 1e-9);
        prop_assert!(report.metrics.consistency_index >= -1e-9);
        prop_assert!(report.metrics.consistency_ratio >= -1e-9);
    }

    #[test]
    fn all_ones_matrix_is_uniform_and_consistent(size in 2usize..=10) {
        let matrix = PairwiseMatrix::from_upper_triangle(size, &vec![1.0; size * (size - 1) / 2])
            .unwrap();
        let normalized = MatrixNormalizer::normalize(matrix.as_square()).unwrap();
        let weights = PriorityVectorDeriver::derive(&normalized);

        for weight in weights.as_slice() {
            prop_assert!((weight - 1.0 / size as f64).abs() < 1e-12);
        }
        let report = ConsistencyChecker::default().check(&matrix, &weights).unwrap();
        prop_assert!(report.metrics.consistency_ratio.abs() < 1e-9);
        prop_assert!(report.classification.is_acceptable());
    }

    #[test]
    fn ranking_is_non_increasing_permutation(
        scores in prop::collection::vec(0.0f64..1.0, 1..12)
    ) {
        let entities = criteria(scores.len());
        let ranked = Ranker::rank(&entities, &scores).unwrap();

        prop_assert_eq!(ranked.len(), scores.len());
        for pair in ranked.entries().windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
        let mut indices: Vec<usize> = ranked.entries().iter().map(|e| e.entity.index).collect();
        indices.sort_unstable();
        prop_assert_eq!(indices, (0..scores.len()).collect::<Vec<_>>());
    }

    #[test]
    fn direct_scores_sum_to_one(
        (matrix, ratings) in reciprocal_matrix().prop_flat_map(|matrix| {
            let size = matrix.size();
            let rows = prop::collection::vec(
                prop::collection::vec(1.0f64..10.0, size),
                1..6,
            );
            (Just(matrix), rows)
        })
    ) {
        let normalized = MatrixNormalizer::normalize(matrix.as_square()).unwrap();
        let weights = PriorityVectorDeriver::derive(&normalized);
        let alternatives: Vec<Alternative> =
            entity_set((0..ratings.len()).map(|i| format!("a{}", i))).unwrap();
        let decision = DecisionMatrix::new(&alternatives, matrix.size(), ratings).unwrap();

        let scores = AlternativeScorer::DirectNormalization.score(&decision, &weights).unwrap();
        prop_assert!((scores.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        prop_assert!(scores.iter().all(|s| *s > 0.0));
    }
}
