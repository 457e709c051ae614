//! AHP Engine - Analytic Hierarchy Process decision support
//!
//! This crate derives criteria weights from pairwise importance judgments,
//! checks those judgments for consistency, and ranks alternatives by
//! combining the weights with per-alternative ratings.
//!
//! # Layout
//!
//! - [`domain`] - Pure AHP computations and the stage-caching engine
//! - [`ports`] - The tabular dataset abstraction the engine reads ratings from
//! - [`adapters`] - An in-memory dataset implementation
//! - [`config`] - Environment and YAML configuration
//! - [`telemetry`] - Tracing subscriber setup

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
