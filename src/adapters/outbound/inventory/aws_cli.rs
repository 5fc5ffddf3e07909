use super::describe::{extract_records, DescribeCommand};
use super::response_cache::ResponseCache;
use crate::network_mapping::domain::ResourceKind;
use crate::ports::outbound::InventorySource;
use crate::shared::error::NetmapError;
use crate::shared::Result;
use std::process::Command;

const AWS_PROGRAM: &str = "aws";

/// AwsCliInventory adapter that lists resources through the `aws` CLI
///
/// Every call runs `aws [--<flag>...] <service> <command> --output json`.
/// With a [`ResponseCache`] attached, responses are served from and written
/// back to disk.
pub struct AwsCliInventory {
    program: String,
    flags: Vec<String>,
    cache: Option<ResponseCache>,
}

impl AwsCliInventory {
    /// `flags` are given without the leading dashes (`profile=prod`, `region eu-west-1`).
    pub fn new(flags: Vec<String>) -> Self {
        Self {
            program: AWS_PROGRAM.to_string(),
            flags,
            cache: None,
        }
    }

    pub fn with_cache(mut self, cache: ResponseCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Overrides the executable, for wrappers such as `aws-vault exec`.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Arguments after the program name
    pub fn arguments(&self, kind: ResourceKind) -> Vec<String> {
        let describe = DescribeCommand::for_kind(kind);
        let mut args: Vec<String> = Vec::new();
        for flag in &self.flags {
            // `region eu-west-1` style flags carry their value as a separate argument
            let mut parts = flag.split_whitespace();
            if let Some(name) = parts.next() {
                args.push(format!("--{}", name.trim_start_matches('-')));
                args.extend(parts.map(str::to_string));
            }
        }
        args.push(describe.service.to_string());
        args.push(describe.command.to_string());
        args.push("--output".to_string());
        args.push("json".to_string());
        args
    }

    pub fn command_line(&self, kind: ResourceKind) -> String {
        let mut words = vec![self.program.clone()];
        words.extend(self.arguments(kind));
        words.join(" ")
    }

    fn run(&self, kind: ResourceKind, command_line: &str) -> Result<String> {
        tracing::debug!(command = command_line, "running inventory command");
        let output = Command::new(&self.program)
            .args(self.arguments(kind))
            .output()
            .map_err(|e| NetmapError::InventoryCommandFailed {
                command: command_line.to_string(),
                details: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(NetmapError::InventoryCommandFailed {
                command: command_line.to_string(),
                details: format!(
                    "{}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            }
            .into());
        }

        String::from_utf8(output.stdout).map_err(|e| {
            NetmapError::InventoryDecodeError {
                source_name: command_line.to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn response(&self, kind: ResourceKind, command_line: &str) -> Result<String> {
        if let Some(cache) = &self.cache {
            if let Some(body) = cache.load(command_line)? {
                return Ok(body);
            }
        }
        let body = self.run(kind, command_line)?;
        if let Some(cache) = &self.cache {
            cache.store(command_line, &body)?;
        }
        Ok(body)
    }
}

impl InventorySource for AwsCliInventory {
    fn fetch(&self, kind: ResourceKind) -> Result<Vec<serde_json::Value>> {
        let command_line = self.command_line(kind);
        let body = self.response(kind, &command_line)?;
        let document: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| NetmapError::InventoryDecodeError {
                source_name: command_line.clone(),
                details: e.to_string(),
            })?;
        extract_records(kind, document, &command_line)
    }
}
