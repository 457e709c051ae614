//! Stable descending ranking of named entities by score.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AhpError, NamedEntity};

/// One ranked entity and its score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry<T> {
    #[serde(flatten)]
    pub entity: T,
    pub score: f64,
}

/// Entities ordered by score, highest first; ties keep input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankedList<T> {
    entries: Vec<RankedEntry<T>>,
}

impl<T: NamedEntity> RankedList<T> {
    /// Returns the entries, best first.
    pub fn entries(&self) -> &[RankedEntry<T>] {
        &self.entries
    }

    /// Returns entity names, best first.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.entity.name()).collect()
    }

    /// Returns the highest-ranked entry.
    pub fn top(&self) -> Option<&RankedEntry<T>> {
        self.entries.first()
    }

    /// Looks up the score of an entity by name.
    pub fn score_of(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.entity.name() == name)
            .map(|e| e.score)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Sorts entities by score.
pub struct Ranker;

impl Ranker {
    /// Pairs `entities[i]` with `scores[i]` and sorts by score descending.
    ///
    /// The sort is stable, so equal scores stay in input order.
    ///
    /// # Errors
    /// - `DimensionMismatch` if the slices differ in length
    pub fn rank<T: NamedEntity>(entities: &[T], scores: &[f64]) -> Result<RankedList<T>, AhpError> {
        if entities.len() != scores.len() {
            return Err(AhpError::dimension_mismatch(
                "score count",
                entities.len(),
                scores.len(),
            ));
        }

        let mut entries: Vec<RankedEntry<T>> = entities
            .iter()
            .cloned()
            .zip(scores.iter().copied())
            .map(|(entity, score)| RankedEntry { entity, score })
            .collect();

        entries.sort_by(|a, b| b.score.total_cmp(&a.score));

        Ok(RankedList { entries })
    }
}
