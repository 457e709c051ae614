//! Serializable summary of one complete engine run.

use serde::{Deserialize, Serialize};

use super::{ConsistencyReport, PriorityVector, RankedList, ScoringStrategy};
use crate::domain::foundation::{Alternative, Criterion, RunId, Timestamp};

/// Results of every stage for a single computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AhpReport {
    pub run_id: RunId,
    pub computed_at: Timestamp,
    pub strategy: ScoringStrategy,
    /// Criteria weights in criterion order.
    pub weights: PriorityVector,
    pub consistency: ConsistencyReport,
    pub criteria: RankedList<Criterion>,
    pub alternatives: RankedList<Alternative>,
}

impl AhpReport {
    /// Creates a report stamped with a fresh run id and the current time.
    pub fn new(
        strategy: ScoringStrategy,
        weights: PriorityVector,
        consistency: ConsistencyReport,
        criteria: RankedList<Criterion>,
        alternatives: RankedList<Alternative>,
    ) -> Self {
        Self {
            run_id: RunId::new(),
            computed_at: Timestamp::now(),
            strategy,
            weights,
            consistency,
            criteria,
            alternatives,
        }
    }

    /// Returns the best alternative's name, if any.
    pub fn recommendation(&self) -> Option<&str> {
        self.alternatives.top().map(|e| e.entity.name.as_str())
    }

    /// Returns true if the judgments passed the consistency threshold.
    pub fn is_consistent(&self) -> bool {
        self.consistency.classification.is_acceptable()
    }
}
