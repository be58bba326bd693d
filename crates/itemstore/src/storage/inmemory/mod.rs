//! In-memory storage backend.
//!
//! HashMap-backed `ItemStore` used in tests and for local development
//! without AWS access. Data is lost when the store is dropped.

mod store;

pub use store::InMemoryStore;
