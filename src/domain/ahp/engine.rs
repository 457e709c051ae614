//! AHP engine - orchestrates the computation stages over caller inputs.

use once_cell::unsync::OnceCell;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::{
    AhpReport, AlternativeScorer, ConsistencyChecker, ConsistencyReport, DecisionMatrix,
    MatrixNormalizer, NormalizedMatrix, PairwiseMatrix, PriorityVector, PriorityVectorDeriver,
    RankedList, Ranker, ScoringStrategy, SubCriteriaExpander, DEFAULT_CONSISTENCY_THRESHOLD,
};
use crate::domain::foundation::{entity_set, AhpError, Alternative, Criterion, Stage};
use crate::ports::TabularDataset;

/// Default advisory tolerance for `a(i,j) · a(j,i) = 1`.
pub const DEFAULT_RECIPROCITY_TOLERANCE: f64 = 1e-6;

/// Default dataset column holding alternative identifiers.
pub const DEFAULT_ALTERNATIVE_ID_COLUMN: &str = "alternative";

/// Ordinal rating scale used by sub-criteria expansion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubCriteriaScale {
    /// Levels per ordinal scale (K). Required for sub-criteria expansion.
    pub scale_size: Option<usize>,
    /// Number of ordinal-rated criteria; defaults to the criteria count.
    pub criterion_count: Option<usize>,
}

/// Per-engine settings.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    pub alternative_id_column: String,
    pub default_strategy: ScoringStrategy,
    pub sub_criteria: SubCriteriaScale,
    pub consistency_threshold: f64,
    pub reciprocity_tolerance: f64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            alternative_id_column: DEFAULT_ALTERNATIVE_ID_COLUMN.to_string(),
            default_strategy: ScoringStrategy::default(),
            sub_criteria: SubCriteriaScale::default(),
            consistency_threshold: DEFAULT_CONSISTENCY_THRESHOLD,
            reciprocity_tolerance: DEFAULT_RECIPROCITY_TOLERANCE,
        }
    }
}

/// AHP computation engine.
///
/// Inputs are fixed at construction. Each stage is computed once and
/// cached; a stage that fails stays unset, so later calls that depend on
/// it fail too.
///
/// # Stage order
///
/// `normalize` → `derive_weights` → (`check_consistency`, `ranked_criteria`,
/// `ranked_alternatives`). Calling a stage before its prerequisite returns
/// `StageNotComputed`.
///
/// The engine is single-threaded (`!Sync`); build one per computation.
pub struct AhpEngine {
    dataset: Arc<dyn TabularDataset>,
    criteria: Vec<Criterion>,
    alternatives: Vec<Alternative>,
    pairwise: PairwiseMatrix,
    settings: EngineSettings,
    normalized: OnceCell<NormalizedMatrix>,
    weights: OnceCell<PriorityVector>,
    consistency: OnceCell<ConsistencyReport>,
    ranked_criteria: OnceCell<RankedList<Criterion>>,
    decision_matrix: OnceCell<DecisionMatrix>,
    sub_criteria: OnceCell<Vec<PriorityVector>>,
    ranked_direct: OnceCell<RankedList<Alternative>>,
    ranked_expanded: OnceCell<RankedList<Alternative>>,
}

impl AhpEngine {
    /// Creates an engine.
    ///
    /// # Errors
    /// - `EmptyName` / `DuplicateName` for bad criterion or alternative names
    /// - `DimensionMismatch` if the pairwise matrix size differs from the criteria count
    pub fn new<C, A>(
        dataset: Arc<dyn TabularDataset>,
        criteria: impl IntoIterator<Item = C>,
        alternatives: impl IntoIterator<Item = A>,
        pairwise: PairwiseMatrix,
        settings: EngineSettings,
    ) -> Result<Self, AhpError>
    where
        C: Into<String>,
        A: Into<String>,
    {
        let criteria: Vec<Criterion> = entity_set(criteria)?;
        let alternatives: Vec<Alternative> = entity_set(alternatives)?;

        if pairwise.size() != criteria.len() {
            return Err(AhpError::dimension_mismatch(
                "pairwise matrix size",
                criteria.len(),
                pairwise.size(),
            ));
        }

        for issue in pairwise.reciprocity_issues(settings.reciprocity_tolerance) {
            warn!(
                row = issue.row,
                col = issue.col,
                product = issue.product,
                "Pairwise judgments are not reciprocal"
            );
        }

        debug!(
            criteria = criteria.len(),
            alternatives = alternatives.len(),
            "AHP engine created"
        );

        Ok(Self {
            dataset,
            criteria,
            alternatives,
            pairwise,
            settings,
            normalized: OnceCell::new(),
            weights: OnceCell::new(),
            consistency: OnceCell::new(),
            ranked_criteria: OnceCell::new(),
            decision_matrix: OnceCell::new(),
            sub_criteria: OnceCell::new(),
            ranked_direct: OnceCell::new(),
            ranked_expanded: OnceCell::new(),
        })
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    pub fn pairwise(&self) -> &PairwiseMatrix {
        &self.pairwise
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Column-normalizes the pairwise matrix.
    pub fn normalize(&self) -> Result<&NormalizedMatrix, AhpError> {
        self.normalized.get_or_try_init(|| {
            let normalized = MatrixNormalizer::normalize(self.pairwise.as_square())?;
            debug!(size = normalized.size(), "Pairwise matrix normalized");
            Ok(normalized)
        })
    }

    /// Derives criteria weights. Requires [`normalize`](Self::normalize).
    pub fn derive_weights(&self) -> Result<&PriorityVector, AhpError> {
        let normalized = self.require_normalized()?;
        Ok(self.weights.get_or_init(|| {
            let weights = PriorityVectorDeriver::derive(normalized);
            debug!(weights = ?weights.as_slice(), "Criteria weights derived");
            weights
        }))
    }

    /// Computes consistency metrics. Requires [`derive_weights`](Self::derive_weights).
    pub fn check_consistency(&self) -> Result<&ConsistencyReport, AhpError> {
        let weights = self.require_weights()?;
        self.consistency.get_or_try_init(|| {
            let checker = ConsistencyChecker::new(self.settings.consistency_threshold);
            let report = checker.check(&self.pairwise, weights)?;

            if report.classification.is_acceptable() {
                info!(
                    consistency_ratio = report.metrics.consistency_ratio,
                    "Consistency ratio acceptable"
                );
            } else {
                warn!(
                    consistency_ratio = report.metrics.consistency_ratio,
                    threshold = report.threshold,
                    "Judgments are inconsistent and should be revised"
                );
            }

            Ok(report)
        })
    }

    /// Ranks criteria by weight. Requires [`derive_weights`](Self::derive_weights).
    pub fn ranked_criteria(&self) -> Result<&RankedList<Criterion>, AhpError> {
        let weights = self.require_weights()?;
        self.ranked_criteria
            .get_or_try_init(|| Ranker::rank(&self.criteria, weights.as_slice()))
    }

    /// Scores and ranks alternatives. Requires [`derive_weights`](Self::derive_weights).
    pub fn ranked_alternatives(
        &self,
        strategy: ScoringStrategy,
    ) -> Result<&RankedList<Alternative>, AhpError> {
        let weights = self.require_weights()?;
        let cache = match strategy {
            ScoringStrategy::DirectNormalization => &self.ranked_direct,
            ScoringStrategy::SubCriteriaExpansion => &self.ranked_expanded,
        };

        cache.get_or_try_init(|| {
            let matrix = self.decision_matrix()?;
            let scorer = match strategy {
                ScoringStrategy::DirectNormalization => AlternativeScorer::DirectNormalization,
                ScoringStrategy::SubCriteriaExpansion => AlternativeScorer::SubCriteriaExpansion {
                    scales: self.sub_criteria_vectors()?,
                },
            };

            let scores = scorer.score(matrix, weights)?;
            let ranked = Ranker::rank(matrix.alternatives(), &scores)?;
            info!(
                strategy = %strategy,
                alternatives = ranked.len(),
                top = ranked.top().map(|e| e.entity.name.as_str()).unwrap_or(""),
                "Alternatives ranked"
            );
            Ok(ranked)
        })
    }

    /// Runs every stage in order and collects the results.
    pub fn report(&self, strategy: ScoringStrategy) -> Result<AhpReport, AhpError> {
        self.normalize()?;
        let weights = self.derive_weights()?.clone();
        let consistency = self.check_consistency()?.clone();
        let criteria = self.ranked_criteria()?.clone();
        let alternatives = self.ranked_alternatives(strategy)?.clone();

        Ok(AhpReport::new(
            strategy,
            weights,
            consistency,
            criteria,
            alternatives,
        ))
    }

    /// Runs [`report`](Self::report) with the configured default strategy.
    pub fn default_report(&self) -> Result<AhpReport, AhpError> {
        self.report(self.settings.default_strategy)
    }

    /// Sub-criteria scale vectors, one per ordinal-rated criterion.
    pub fn sub_criteria_vectors(&self) -> Result<&[PriorityVector], AhpError> {
        self.sub_criteria
            .get_or_try_init(|| {
                let scale = &self.settings.sub_criteria;
                let scale_size = scale.scale_size.ok_or(AhpError::ScaleNotConfigured)?;
                let count = scale.criterion_count.unwrap_or(self.criteria.len());
                debug!(scale_size, count, "Expanding sub-criteria scales");
                SubCriteriaExpander::expand_all(scale_size, count)
            })
            .map(Vec::as_slice)
    }

    fn decision_matrix(&self) -> Result<&DecisionMatrix, AhpError> {
        self.decision_matrix.get_or_try_init(|| {
            DecisionMatrix::from_dataset(
                self.dataset.as_ref(),
                &self.settings.alternative_id_column,
                &self.criteria,
                &self.alternatives,
            )
        })
    }

    fn require_normalized(&self) -> Result<&NormalizedMatrix, AhpError> {
        self.normalized.get().ok_or(AhpError::StageNotComputed {
            required: Stage::Normalize,
        })
    }

    fn require_weights(&self) -> Result<&PriorityVector, AhpError> {
        self.weights.get().ok_or(AhpError::StageNotComputed {
            required: Stage::DeriveWeights,
        })
    }
}
