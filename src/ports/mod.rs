//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Data Ports
//!
//! - `TabularDataset` - Read access to the decision dataset (ratings per alternative)

mod tabular_dataset;

pub use tabular_dataset::{CellValue, TabularDataset};
