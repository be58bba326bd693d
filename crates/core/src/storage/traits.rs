use async_trait::async_trait;

use crate::item::ItemRecord;

use super::Result;

/// Write-side gateway to the item store.
///
/// One best-effort write per call: no retries, no backoff, no idempotency
/// handling beyond what the backing store provides.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Writes a single record, keyed by its `id`.
    async fn put_item(&self, record: &ItemRecord) -> Result<()>;
}
