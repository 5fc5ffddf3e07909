//! Configuration file support for cloud-netmap.
//!
//! Provides YAML-based configuration through `netmap.config.yml` files,
//! including data structures, file loading, validation, and merging with
//! command-line arguments (the command line wins).

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use cloud_netmap::adapters::outbound::inventory::DEFAULT_CACHE_DIR;
use cloud_netmap::application::factories::InventoryType;
use cloud_netmap::shared::security::read_checked;
use cloud_netmap::shared::Result;

use crate::cli::Args;

pub const CONFIG_FILENAME: &str = "netmap.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub aws_flags: Option<Vec<String>>,
    pub cache_dir: Option<PathBuf>,
    pub cache_ttl_hours: Option<u32>,
    pub no_cache: Option<bool>,
    pub draw_security_groups: Option<bool>,
    pub output_dir: Option<PathBuf>,
    pub inventory_dir: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_checked(path, "config file").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.cache_ttl_hours == Some(0) {
        bail!(
            "Invalid config: cache_ttl_hours must be greater than 0.\n\n\
             💡 Hint: Omit cache_ttl_hours to keep cached responses forever, or use no_cache: true to always refresh."
        );
    }
    if let Some(ref flags) = config.aws_flags {
        for (i, flag) in flags.iter().enumerate() {
            if flag.trim().is_empty() {
                bail!(
                    "Invalid config: aws_flags[{}] must not be empty.\n\n\
                     💡 Hint: Each entry is a flag name without dashes, optionally followed by its value (e.g., \"profile prod\").",
                    i
                );
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Effective run settings after merging the config file under the CLI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub network: Option<String>,
    pub subnet: Option<String>,
    pub draw_security_groups: bool,
    pub output: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub inventory: InventoryType,
}

impl Settings {
    pub fn merge(args: &Args, config: Option<ConfigFile>) -> Self {
        let config = config.unwrap_or_default();

        let inventory = match args.inventory_dir.clone().or(config.inventory_dir) {
            Some(directory) => InventoryType::Directory(directory),
            None => {
                // CLI flags are appended after the configured ones so they win in the aws CLI
                let mut flags = config.aws_flags.unwrap_or_default();
                flags.extend(args.aws_flags.iter().cloned());
                InventoryType::AwsCli {
                    flags,
                    cache_dir: config
                        .cache_dir
                        .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_DIR)),
                    cache_ttl_hours: config.cache_ttl_hours,
                    no_cache: args.nocache || config.no_cache.unwrap_or(false),
                }
            }
        };

        Self {
            network: args.network_id(),
            subnet: args.subnet_id(),
            draw_security_groups: args.security || config.draw_security_groups.unwrap_or(false),
            output: args.output.clone(),
            output_dir: args
                .output_dir
                .clone()
                .or(config.output_dir)
                .unwrap_or_else(|| PathBuf::from(".")),
            inventory,
        }
    }
}
