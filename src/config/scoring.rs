//! Alternative scoring configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::ahp::{ScoringStrategy, SubCriteriaScale, DEFAULT_ALTERNATIVE_ID_COLUMN};

/// How alternatives are scored and where their identifiers live
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ScoringConfig {
    /// Strategy used when none is given explicitly
    #[serde(default)]
    pub strategy: ScoringStrategy,

    /// Dataset column that names each alternative
    #[serde(default = "default_alternative_id_column")]
    pub alternative_id_column: String,

    /// Levels in each ordinal rating scale (sub-criteria expansion only)
    #[serde(default)]
    pub sub_criteria_scale: Option<usize>,

    /// Number of ordinal-rated criteria; defaults to the criteria count
    #[serde(default)]
    pub sub_criteria_count: Option<usize>,
}

impl ScoringConfig {
    /// Ordinal scale settings for the engine
    pub fn sub_criteria(&self) -> SubCriteriaScale {
        SubCriteriaScale {
            scale_size: self.sub_criteria_scale,
            criterion_count: self.sub_criteria_count,
        }
    }

    /// Validate scoring configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.alternative_id_column.trim().is_empty() {
            return Err(ValidationError::MissingRequired("scoring.alternative_id_column"));
        }
        if self.sub_criteria_scale == Some(0) {
            return Err(ValidationError::InvalidScaleSize);
        }
        if self.sub_criteria_count == Some(0) {
            return Err(ValidationError::InvalidSubCriteriaCount);
        }
        if self.strategy == ScoringStrategy::SubCriteriaExpansion
            && self.sub_criteria_scale.is_none()
        {
            return Err(ValidationError::MissingRequired("scoring.sub_criteria_scale"));
        }
        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            strategy: ScoringStrategy::default(),
            alternative_id_column: default_alternative_id_column(),
            sub_criteria_scale: None,
            sub_criteria_count: None,
        }
    }
}

fn default_alternative_id_column() -> String {
    DEFAULT_ALTERNATIVE_ID_COLUMN.to_string()
}
