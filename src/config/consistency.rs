//! Consistency check configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::ahp::{DEFAULT_CONSISTENCY_THRESHOLD, DEFAULT_RECIPROCITY_TOLERANCE};

/// Thresholds applied when judging pairwise comparisons
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ConsistencyConfig {
    /// Consistency ratios below this are acceptable
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Allowed deviation of `a(i,j) * a(j,i)` from 1 before a warning is logged
    #[serde(default = "default_reciprocity_tolerance")]
    pub reciprocity_tolerance: f64,
}

impl ConsistencyConfig {
    /// Validate consistency configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.threshold > 0.0 && self.threshold <= 1.0) {
            return Err(ValidationError::InvalidThreshold(self.threshold));
        }
        if !(self.reciprocity_tolerance > 0.0) {
            return Err(ValidationError::InvalidReciprocityTolerance(
                self.reciprocity_tolerance,
            ));
        }
        Ok(())
    }
}

impl Default for ConsistencyConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            reciprocity_tolerance: default_reciprocity_tolerance(),
        }
    }
}

fn default_threshold() -> f64 {
    DEFAULT_CONSISTENCY_THRESHOLD
}

fn default_reciprocity_tolerance() -> f64 {
    DEFAULT_RECIPROCITY_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consistency_defaults() {
        let config = ConsistencyConfig::default();
        assert_eq!(config.threshold, 0.10);
        assert_eq!(config.reciprocity_tolerance, 1e-6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_threshold_bounds() {
        for bad in [0.0, -0.1, 1.5, f64::NAN] {
            let config = ConsistencyConfig {
                threshold: bad,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "threshold {} accepted", bad);
        }

        let config = ConsistencyConfig {
            threshold: 1.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_reciprocity_tolerance_must_be_positive() {
        let config = ConsistencyConfig {
            reciprocity_tolerance: 0.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidReciprocityTolerance(0.0))
        );
    }
}
