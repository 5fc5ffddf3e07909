use crate::adapters::outbound::inventory::{
    AwsCliInventory, JsonDirectoryInventory, MemoizingInventory, ResponseCache,
};
use crate::ports::outbound::InventorySource;
use std::path::PathBuf;

/// Where resource records come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryType {
    /// Saved `describe-*.json` documents
    Directory(PathBuf),
    /// Live `aws` CLI calls behind the response cache
    AwsCli {
        flags: Vec<String>,
        cache_dir: PathBuf,
        cache_ttl_hours: Option<u32>,
        no_cache: bool,
    },
}

/// Factory for creating inventory sources
///
/// Every source is wrapped in [`MemoizingInventory`] so a kind is fetched at
/// most once per run.
pub struct InventoryFactory;

impl InventoryFactory {
    pub fn create(inventory_type: InventoryType) -> Box<dyn InventorySource> {
        match inventory_type {
            InventoryType::Directory(directory) => {
                tracing::debug!(directory = %directory.display(), "reading inventory documents");
                Box::new(MemoizingInventory::new(JsonDirectoryInventory::new(
                    directory,
                )))
            }
            InventoryType::AwsCli {
                flags,
                cache_dir,
                cache_ttl_hours,
                no_cache,
            } => {
                let cache = ResponseCache::new(cache_dir)
                    .with_ttl_hours(cache_ttl_hours)
                    .with_refresh(no_cache);
                Box::new(MemoizingInventory::new(
                    AwsCliInventory::new(flags).with_cache(cache),
                ))
            }
        }
    }
}
