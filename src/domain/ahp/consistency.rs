//! Consistency index and ratio of a pairwise comparison matrix.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{PairwiseMatrix, PriorityVector};
use crate::domain::foundation::{AhpError, CONSISTENCY_ZERO_TOLERANCE, ZERO_TOLERANCE};

/// Default upper bound (exclusive) for an acceptable consistency ratio.
pub const DEFAULT_CONSISTENCY_THRESHOLD: f64 = 0.10;

/// Saaty's random consistency index, indexed by matrix size.
const RANDOM_INDEX: [f64; 11] = [
    0.0, 0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49,
];

/// Bounded lookup of random index reference values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomIndexTable {
    values: &'static [f64],
}

impl RandomIndexTable {
    /// The standard table, covering sizes 0 through 10.
    pub const STANDARD: Self = Self {
        values: &RANDOM_INDEX,
    };

    /// Largest matrix size with a reference value.
    pub fn max_size(&self) -> usize {
        self.values.len() - 1
    }

    /// Returns the random index for a matrix of `size`.
    ///
    /// # Errors
    /// - `RandomIndexOutOfRange` if `size` is past the end of the table
    pub fn lookup(&self, size: usize) -> Result<f64, AhpError> {
        self.values
            .get(size)
            .copied()
            .ok_or(AhpError::RandomIndexOutOfRange {
                size,
                max: self.max_size(),
            })
    }
}

impl Default for RandomIndexTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Consistency index and ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyMetrics {
    pub consistency_index: f64,
    pub consistency_ratio: f64,
}

/// Advisory verdict on a consistency ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Acceptable,
    Inconsistent,
}

impl Classification {
    /// Human-readable verdict.
    pub fn message(&self) -> &'static str {
        match self {
            Classification::Acceptable => "acceptable",
            Classification::Inconsistent => "inconsistent: judgments should be revised",
        }
    }

    pub fn is_acceptable(&self) -> bool {
        matches!(self, Classification::Acceptable)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Full result of a consistency check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyReport {
    pub metrics: ConsistencyMetrics,
    pub lambda_max: f64,
    pub random_index: f64,
    pub threshold: f64,
    pub classification: Classification,
}

/// Computes consistency metrics from judgments and their derived weights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsistencyChecker {
    table: RandomIndexTable,
    threshold: f64,
}

impl ConsistencyChecker {
    /// Creates a checker with the standard table and a custom threshold.
    pub fn new(threshold: f64) -> Self {
        Self {
            table: RandomIndexTable::STANDARD,
            threshold,
        }
    }

    /// Returns the lookup table in use.
    pub fn table(&self) -> &RandomIndexTable {
        &self.table
    }

    /// Computes λmax, CI and CR and classifies the ratio.
    ///
    /// # Algorithm
    /// 1. weighted[i] = Σ_j a(i,j) · w[j]
    /// 2. λmax = mean_i(weighted[i] / w[i])
    /// 3. CI = (λmax − N) / (N − 1)
    /// 4. CR = CI / RI[N]
    ///
    /// # Errors
    /// - `DimensionMismatch` if weights and matrix differ in size
    /// - `UndefinedConsistency` for N = 1
    /// - `ZeroWeight` if any weight is zero
    /// - `RandomIndexOutOfRange` for N past the table bound
    /// - `ZeroRandomIndex` if RI[N] is 0 and CI is not
    pub fn check(
        &self,
        matrix: &PairwiseMatrix,
        weights: &PriorityVector,
    ) -> Result<ConsistencyReport, AhpError> {
        let n = matrix.size();
        if weights.len() != n {
            return Err(AhpError::dimension_mismatch("weight vector length", n, weights.len()));
        }
        if n < 2 {
            return Err(AhpError::UndefinedConsistency { size: n });
        }

        let w = weights.as_slice();
        let mut ratio_sum = 0.0;
        for (i, &weight) in w.iter().enumerate() {
            if weight.abs() <= ZERO_TOLERANCE {
                return Err(AhpError::ZeroWeight { index: i });
            }
            let weighted: f64 = (0..n).map(|j| matrix.get(i, j) * w[j]).sum();
            ratio_sum += weighted / weight;
        }

        let lambda_max = ratio_sum / n as f64;
        let consistency_index = (lambda_max - n as f64) / (n as f64 - 1.0);

        let random_index = self.table.lookup(n)?;
        let consistency_ratio = if random_index == 0.0 {
            if consistency_index.abs() > CONSISTENCY_ZERO_TOLERANCE {
                return Err(AhpError::ZeroRandomIndex {
                    size: n,
                    consistency_index,
                });
            }
            0.0
        } else {
            consistency_index / random_index
        };

        let classification = if consistency_ratio < self.threshold {
            Classification::Acceptable
        } else {
            Classification::Inconsistent
        };

        Ok(ConsistencyReport {
            metrics: ConsistencyMetrics {
                consistency_index,
                consistency_ratio,
            },
            lambda_max,
            random_index,
            threshold: self.threshold,
            classification,
        })
    }
}

impl Default for ConsistencyChecker {
    fn default() -> Self {
        Self::new(DEFAULT_CONSISTENCY_THRESHOLD)
    }
}
