//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (entities, IDs, errors)
//! - `ahp` - Pure Analytic Hierarchy Process computation and the engine that orchestrates it

pub mod ahp;
pub mod foundation;
