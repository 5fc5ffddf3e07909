use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every requested artifact was rendered
    Success = 0,
    /// Inventory acquisition, rendering or output failed
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for network mapping.
///
/// Acquisition failures and operator-input mistakes end up here. Dangling
/// references inside the inventory are not errors; renderers skip them.
#[derive(Debug, Error)]
pub enum NetmapError {
    #[error("Inventory command failed: {command}\nDetails: {details}\n\n💡 Hint: Check that the aws CLI is installed, on PATH and has valid credentials")]
    InventoryCommandFailed { command: String, details: String },

    #[error("Failed to decode inventory response from {source_name}\nDetails: {details}\n\n💡 Hint: Re-run with --nocache to discard a corrupted cached response")]
    InventoryDecodeError { source_name: String, details: String },

    #[error("Failed to decode {kind} record #{index}\nDetails: {details}\n\n💡 Hint: The inventory document does not match the expected provider schema")]
    RecordDecodeError {
        kind: String,
        index: usize,
        details: String,
    },

    #[error("Unknown resource: {id}\n\n💡 Hint: Check the identifier against the inventory (e.g. `aws ec2 describe-instances`)")]
    UnknownResource { id: String },

    #[error("Resource {id} is a {kind}, not an instance\n\n💡 Hint: --secmap expects an instance id such as i-0123456789abcdef0")]
    NotAnInstance { id: String, kind: String },

    #[error("Invalid IP address: {value}\n\n💡 Hint: Use a plain IPv4 or IPv6 address such as 10.0.1.15")]
    InvalidAddress { value: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },
}
