//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `dataset` - Tabular dataset implementations (in-memory)

pub mod dataset;

pub use dataset::{InMemoryDataset, InMemoryDatasetBuilder};
