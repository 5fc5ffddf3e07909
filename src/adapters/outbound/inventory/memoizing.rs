use crate::network_mapping::domain::ResourceKind;
use crate::ports::outbound::InventorySource;
use crate::shared::Result;
use dashmap::DashMap;
use std::sync::Arc;

/// MemoizingInventory wraps an InventorySource and adds in-memory caching.
///
/// Each kind is fetched from the inner source at most once, so repeated
/// fetches within one run return identical records. The cache is
/// thread-safe.
pub struct MemoizingInventory<S: InventorySource> {
    inner: S,
    cache: Arc<DashMap<ResourceKind, Vec<serde_json::Value>>>,
}

impl<S: InventorySource> MemoizingInventory<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Returns the current cache size (for testing/monitoring)
    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl<S: InventorySource> InventorySource for MemoizingInventory<S> {
    fn fetch(&self, kind: ResourceKind) -> Result<Vec<serde_json::Value>> {
        if let Some(cached) = self.cache.get(&kind) {
            return Ok(cached.value().clone());
        }

        let records = self.inner.fetch(kind)?;
        self.cache.insert(kind, records.clone());
        Ok(records)
    }
}
