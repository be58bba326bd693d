//! In-memory store implementation.

use std::collections::HashMap;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use async_trait::async_trait;
use tokio::sync::RwLock;

use itemstore_core::item::ItemRecord;
use itemstore_core::storage::{ItemStore, Result};

/// In-memory item store.
///
/// Records live in a HashMap wrapped in `Arc<RwLock<_>>`. A put counter is
/// kept so tests can assert how many write attempts reached the store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    items: Arc<RwLock<HashMap<String, ItemRecord>>>,
    puts: Arc<AtomicU64>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored record for `id`, if any.
    pub async fn get(&self, id: &str) -> Option<ItemRecord> {
        self.items.read().await.get(id).cloned()
    }

    /// Number of records currently stored.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    /// Number of put attempts that reached the store.
    pub fn put_count(&self) -> u64 {
        self.puts.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ItemStore for InMemoryStore {
    async fn put_item(&self, record: &ItemRecord) -> Result<()> {
        self.puts.fetch_add(1, Ordering::Relaxed);

        // Last write wins, like an unconditional PutItem.
        let mut items = self.items.write().await;
        items.insert(record.id.clone(), record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, data: &str) -> ItemRecord {
        ItemRecord::new(id.to_string(), data.to_string())
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let store = InMemoryStore::new();

        store.put_item(&record("a1", "hello")).await.unwrap();

        let stored = store.get("a1").await.unwrap();
        assert_eq!(stored.data, "hello");
        assert_eq!(store.len().await, 1);
        assert_eq!(store.put_count(), 1);
    }

    #[tokio::test]
    async fn test_put_overwrites_existing_id() {
        let store = InMemoryStore::new();

        store.put_item(&record("a1", "first")).await.unwrap();
        store.put_item(&record("a1", "second")).await.unwrap();

        assert_eq!(store.get("a1").await.unwrap().data, "second");
        assert_eq!(store.len().await, 1);
        assert_eq!(store.put_count(), 2);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = InMemoryStore::new();
        let other = store.clone();

        store.put_item(&record("a1", "hello")).await.unwrap();

        assert!(other.get("a1").await.is_some());
        assert_eq!(other.put_count(), 1);
    }
}
