//! Engine configuration module
//!
//! Configuration is loaded from environment variables with the `AHP` prefix
//! (nested values separated by `__`), or from a YAML document. Every section
//! has defaults, so an empty environment yields a working configuration.
//!
//! # Example
//!
//! ```no_run
//! use ahp_engine::config::AhpConfig;
//!
//! let config = AhpConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let settings = config.engine_settings();
//! println!("Scoring with {}", settings.default_strategy);
//! ```

mod consistency;
mod error;
mod logging;
mod scoring;

pub use consistency::ConsistencyConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use scoring::ScoringConfig;

use serde::Deserialize;
use std::path::Path;

use crate::domain::ahp::EngineSettings;

/// Root engine configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AhpConfig {
    /// Alternative scoring (strategy, id column, ordinal scale)
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Consistency threshold and reciprocity tolerance
    #[serde(default)]
    pub consistency: ConsistencyConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AhpConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present
    /// 2. Reads environment variables with `AHP` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `AHP__SCORING__STRATEGY=sub_criteria_expansion` -> `scoring.strategy`
    /// - `AHP__CONSISTENCY__THRESHOLD=0.08` -> `consistency.threshold = 0.08`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default().prefix("AHP").separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Parse configuration from a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse a YAML configuration file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.scoring.validate()?;
        self.consistency.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Settings for a new [`AhpEngine`](crate::domain::ahp::AhpEngine)
    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings::from(self)
    }
}

impl From<&AhpConfig> for EngineSettings {
    fn from(config: &AhpConfig) -> Self {
        Self {
            alternative_id_column: config.scoring.alternative_id_column.clone(),
            default_strategy: config.scoring.strategy,
            sub_criteria: config.scoring.sub_criteria(),
            consistency_threshold: config.consistency.threshold,
            reciprocity_tolerance: config.consistency.reciprocity_tolerance,
        }
    }
}
