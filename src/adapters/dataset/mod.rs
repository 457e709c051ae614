//! Dataset adapters.

mod in_memory;

pub use in_memory::{InMemoryDataset, InMemoryDatasetBuilder};
