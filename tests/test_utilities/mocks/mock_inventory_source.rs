use cloud_netmap::prelude::*;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock InventorySource serving canned records and counting fetches
#[derive(Default, Clone)]
pub struct MockInventorySource {
    records: HashMap<ResourceKind, Vec<Value>>,
    failing: Option<ResourceKind>,
    pub fetches: Arc<Mutex<Vec<ResourceKind>>>,
}

impl MockInventorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(mut self, kind: ResourceKind, records: Vec<Value>) -> Self {
        self.records.entry(kind).or_default().extend(records);
        self
    }

    /// Makes every fetch of `kind` fail like a broken CLI call
    pub fn failing_on(mut self, kind: ResourceKind) -> Self {
        self.failing = Some(kind);
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.lock().unwrap().len()
    }
}

impl InventorySource for MockInventorySource {
    fn fetch(&self, kind: ResourceKind) -> Result<Vec<Value>> {
        self.fetches.lock().unwrap().push(kind);
        if self.failing == Some(kind) {
            anyhow::bail!("mock inventory failure for {}", kind);
        }
        Ok(self.records.get(&kind).cloned().unwrap_or_default())
    }
}
