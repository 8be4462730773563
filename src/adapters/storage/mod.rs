//! Storage Adapters
//!
//! Implementations of the ResponseStore port for persisting assessments.
//!
//! ## Available Adapters
//!
//! - **FileResponseStore** - Stores each assessment as JSON files on disk
//! - **InMemoryResponseStore** - Stores assessments in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileResponseStore, InMemoryResponseStore};
//!
//! // Durable: file-based storage
//! let store = FileResponseStore::new("./data/assessments");
//!
//! // Testing: in-memory storage
//! let store = InMemoryResponseStore::new();
//! ```

mod file_response_store;
mod in_memory_response_store;

pub use file_response_store::FileResponseStore;
pub use in_memory_response_store::InMemoryResponseStore;
