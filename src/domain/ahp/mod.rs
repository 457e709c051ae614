//! AHP Module - Analytic Hierarchy Process computation engine.
//!
//! Turns a matrix of pairwise importance judgments into criteria weights,
//! checks the judgments for consistency, and combines the weights with
//! per-alternative ratings into a ranked preference list.
//!
//! # Components
//!
//! - `PairwiseMatrix` / `SquareMatrix` - Validated judgment matrix and its numeric carrier
//! - `MatrixNormalizer` - Column-sum normalization
//! - `PriorityVectorDeriver` - Row-average reduction to a weight vector
//! - `ConsistencyChecker` - Consistency index/ratio against the random index table
//! - `SubCriteriaExpander` - Rank-based priority vectors for ordinal scales
//! - `AlternativeScorer` - Direct normalization or sub-criteria expansion scoring
//! - `Ranker` - Stable descending sort by score
//! - `AhpEngine` - Stage orchestration with per-instance caching
//!
//! All components except `AhpEngine` are pure functions over their inputs.

mod consistency;
mod decision;
mod engine;
mod matrix;
mod normalizer;
mod priority;
mod ranker;
mod report;
mod scorer;
mod sub_criteria;

pub use consistency::{
    Classification, ConsistencyChecker, ConsistencyMetrics, ConsistencyReport, RandomIndexTable,
    DEFAULT_CONSISTENCY_THRESHOLD,
};
pub use decision::DecisionMatrix;
pub use engine::{
    AhpEngine, EngineSettings, SubCriteriaScale, DEFAULT_ALTERNATIVE_ID_COLUMN,
    DEFAULT_RECIPROCITY_TOLERANCE,
};
pub use matrix::{PairwiseMatrix, ReciprocityIssue, SquareMatrix};
pub use normalizer::{MatrixNormalizer, NormalizedMatrix};
pub use priority::{PriorityVector, PriorityVectorDeriver};
pub use ranker::{RankedEntry, RankedList, Ranker};
pub use report::AhpReport;
pub use scorer::{AlternativeScorer, ScoringStrategy};
pub use sub_criteria::SubCriteriaExpander;
