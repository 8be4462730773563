//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Response store implementations (in-memory, file)
//! - `http` - REST API over the assessment handlers

pub mod http;
pub mod storage;

pub use storage::{FileResponseStore, InMemoryResponseStore};
