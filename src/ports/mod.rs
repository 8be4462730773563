//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `ResponseStore` - Persists per-assessment responses and lead details

mod response_store;

pub use response_store::{ResponseStore, ResponseStoreError};
