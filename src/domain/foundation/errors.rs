//! Error types for the AHP domain layer.

use std::fmt;
use thiserror::Error;

/// Error categories, one per class of failure the engine can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Inputs disagree in shape or are missing required settings.
    Configuration,
    /// A division by a zero sum or weight would be required.
    DegenerateInput,
    /// A lookup or rating falls outside its valid bounds.
    Range,
    /// The quantity has no mathematical definition for this input.
    UndefinedComputation,
    /// A stage was requested before the stage it depends on.
    StageOrder,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::Configuration => "CONFIGURATION_ERROR",
            ErrorKind::DegenerateInput => "DEGENERATE_INPUT",
            ErrorKind::Range => "RANGE_ERROR",
            ErrorKind::UndefinedComputation => "UNDEFINED_COMPUTATION",
            ErrorKind::StageOrder => "STAGE_ORDER",
        };
        write!(f, "{}", s)
    }
}

/// Engine stages that cache their result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Normalize,
    DeriveWeights,
    CheckConsistency,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Normalize => "normalize",
            Stage::DeriveWeights => "derive_weights",
            Stage::CheckConsistency => "check_consistency",
        };
        write!(f, "{}", s)
    }
}

/// Errors raised by the AHP computation engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AhpError {
    #[error("Matrix must not be empty")]
    EmptyMatrix,

    #[error("Matrix is not square: row {row} has {actual} entries, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("{what} mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid judgment at ({row}, {col}) = {value}: {reason}")]
    InvalidJudgment {
        row: usize,
        col: usize,
        value: f64,
        reason: &'static str,
    },

    #[error("A {kind} name must not be empty")]
    EmptyName { kind: &'static str },

    #[error("Duplicate {kind} name '{name}'")]
    DuplicateName { kind: &'static str, name: String },

    #[error("Dataset has no column named '{column}'")]
    MissingColumn { column: String },

    #[error("Dataset row {row} is labelled '{actual}', expected alternative '{expected}'")]
    AlternativeMismatch {
        row: usize,
        expected: String,
        actual: String,
    },

    #[error("Dataset cell at row {row}, column '{column}' is not numeric")]
    NonNumericCell { row: usize, column: String },

    #[error("Rating {rating} for '{alternative}' on criterion {criterion} must be finite and non-negative")]
    InvalidRating {
        alternative: String,
        criterion: usize,
        rating: f64,
    },

    #[error("Weights must be non-negative and sum to 1, got sum {sum}")]
    NotNormalized { sum: f64 },

    #[error("Rating scale size is not configured")]
    ScaleNotConfigured,

    #[error("Column {column} sums to zero")]
    ZeroColumnSum { column: usize },

    #[error("Weight at position {index} is zero")]
    ZeroWeight { index: usize },

    #[error("Ratings for alternative '{alternative}' sum to zero")]
    ZeroRatingSum { alternative: String },

    #[error("Alternative scores sum to zero")]
    ZeroTotalScore,

    #[error("Random index is zero for matrix size {size} but consistency index is {consistency_index}")]
    ZeroRandomIndex { size: usize, consistency_index: f64 },

    #[error("Matrix size {size} exceeds random index table bound {max}")]
    RandomIndexOutOfRange { size: usize, max: usize },

    #[error("Rating {rating} for '{alternative}' on criterion {criterion} is outside [1, {max}]")]
    RatingOutOfRange {
        alternative: String,
        criterion: usize,
        rating: f64,
        max: usize,
    },

    #[error("Consistency index is undefined for a matrix of size {size}")]
    UndefinedConsistency { size: usize },

    #[error("Stage '{required}' must run before this call")]
    StageNotComputed { required: Stage },
}

impl AhpError {
    /// Returns the taxonomy class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AhpError::EmptyMatrix
            | AhpError::NotSquare { .. }
            | AhpError::DimensionMismatch { .. }
            | AhpError::InvalidJudgment { .. }
            | AhpError::EmptyName { .. }
            | AhpError::DuplicateName { .. }
            | AhpError::MissingColumn { .. }
            | AhpError::AlternativeMismatch { .. }
            | AhpError::NonNumericCell { .. }
            | AhpError::InvalidRating { .. }
            | AhpError::NotNormalized { .. }
            | AhpError::ScaleNotConfigured => ErrorKind::Configuration,
            AhpError::ZeroColumnSum { .. }
            | AhpError::ZeroWeight { .. }
            | AhpError::ZeroRatingSum { .. }
            | AhpError::ZeroTotalScore
            | AhpError::ZeroRandomIndex { .. } => ErrorKind::DegenerateInput,
            AhpError::RandomIndexOutOfRange { .. } | AhpError::RatingOutOfRange { .. } => {
                ErrorKind::Range
            }
            AhpError::UndefinedConsistency { .. } => ErrorKind::UndefinedComputation,
            AhpError::StageNotComputed { .. } => ErrorKind::StageOrder,
        }
    }

    /// Creates a dimension mismatch error.
    pub fn dimension_mismatch(what: &'static str, expected: usize, actual: usize) -> Self {
        AhpError::DimensionMismatch {
            what,
            expected,
            actual,
        }
    }
}
