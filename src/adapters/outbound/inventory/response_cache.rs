use crate::shared::error::NetmapError;
use crate::shared::Result;
use chrono::{DateTime, Duration, Utc};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CACHE_DIR: &str = ".cache";

/// On-disk store of raw CLI responses keyed by a digest of the command line
///
/// Entries are plain JSON text. An entry is served while it is younger than
/// the configured TTL (no TTL: entries never expire) and `refresh` is off.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    directory: PathBuf,
    ttl: Option<Duration>,
    refresh: bool,
}

impl ResponseCache {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ttl: None,
            refresh: false,
        }
    }

    pub fn with_ttl_hours(mut self, hours: Option<u32>) -> Self {
        self.ttl = hours.map(|h| Duration::hours(i64::from(h)));
        self
    }

    /// Ignore existing entries; fresh responses are still written back.
    pub fn with_refresh(mut self, refresh: bool) -> Self {
        self.refresh = refresh;
        self
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// SHA-256 hex digest of the full command line
    pub fn fingerprint(command_line: &str) -> String {
        hex::encode(Sha256::digest(command_line.as_bytes()))
    }

    fn entry_path(&self, command_line: &str) -> PathBuf {
        self.directory.join(Self::fingerprint(command_line))
    }

    /// Returns the cached response, or `None` when there is none to use.
    pub fn load(&self, command_line: &str) -> Result<Option<String>> {
        if self.refresh {
            return Ok(None);
        }
        let path = self.entry_path(command_line);
        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(_) => return Ok(None),
        };

        if let Some(ttl) = self.ttl {
            let modified: DateTime<Utc> = metadata
                .modified()
                .map_err(|e| NetmapError::FileReadError {
                    path: path.clone(),
                    details: e.to_string(),
                })?
                .into();
            if Utc::now() - modified > ttl {
                tracing::debug!(command = command_line, "cached response expired");
                return Ok(None);
            }
        }

        let body = fs::read_to_string(&path).map_err(|e| NetmapError::FileReadError {
            path: path.clone(),
            details: e.to_string(),
        })?;
        tracing::debug!(command = command_line, path = %path.display(), "using cached response");
        Ok(Some(body))
    }

    pub fn store(&self, command_line: &str, body: &str) -> Result<()> {
        fs::create_dir_all(&self.directory).map_err(|e| NetmapError::FileWriteError {
            path: self.directory.clone(),
            details: e.to_string(),
        })?;
        let path = self.entry_path(command_line);
        fs::write(&path, body).map_err(|e| NetmapError::FileWriteError {
            path,
            details: e.to_string(),
        })?;
        Ok(())
    }
}
