//! Storage backend implementations.
//!
//! Concrete implementations of the `ItemStore` trait from
//! `itemstore_core::storage`. Both backends are always compiled; the
//! binary picks one at startup via the `--backend` flag.

pub mod dynamodb;
pub mod inmemory;

pub use dynamodb::DynamoDbStore;
pub use inmemory::InMemoryStore;
