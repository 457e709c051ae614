//! Foundation module - Shared domain primitives.
//!
//! Contains the named entities, identifiers, tolerances and error types
//! that form the vocabulary of the AHP domain.

mod entity;
mod errors;
mod ids;
mod timestamp;

pub use entity::{entity_set, Alternative, Criterion, NamedEntity};
pub use errors::{AhpError, ErrorKind, Stage};
pub use ids::RunId;
pub use timestamp::Timestamp;

/// Absolute tolerance below which a sum or weight is treated as zero.
pub const ZERO_TOLERANCE: f64 = 1e-12;

/// Tolerance for "sums to one" checks on normalized vectors.
pub const SUM_TOLERANCE: f64 = 1e-9;

/// Magnitude below which a consistency index counts as zero.
pub const CONSISTENCY_ZERO_TOLERANCE: f64 = 1e-9;
