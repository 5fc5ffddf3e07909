use super::describe::{extract_records, DescribeCommand};
use crate::network_mapping::domain::ResourceKind;
use crate::ports::outbound::InventorySource;
use crate::shared::error::NetmapError;
use crate::shared::security::read_checked;
use crate::shared::Result;
use std::path::PathBuf;

/// JsonDirectoryInventory adapter for offline runs
///
/// Reads `<dir>/describe-*.json`, the documents the provider CLI prints.
/// A missing file means there are no resources of that kind.
pub struct JsonDirectoryInventory {
    directory: PathBuf,
}

impl JsonDirectoryInventory {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }
}

impl InventorySource for JsonDirectoryInventory {
    fn fetch(&self, kind: ResourceKind) -> Result<Vec<serde_json::Value>> {
        let path = self
            .directory
            .join(DescribeCommand::for_kind(kind).file_name());
        if !path.exists() && path.symlink_metadata().is_err() {
            tracing::debug!(path = %path.display(), kind = %kind, "no inventory document");
            return Ok(Vec::new());
        }

        let body = read_checked(&path, "inventory document")?;
        let document: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| NetmapError::InventoryDecodeError {
                source_name: path.display().to_string(),
                details: e.to_string(),
            })?;
        extract_records(kind, document, &path.display().to_string())
    }
}
