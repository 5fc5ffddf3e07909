/// Inventory adapters: provider CLI, disk cache, offline documents, in-memory memo
mod aws_cli;
mod describe;
mod json_directory;
mod memoizing;
mod response_cache;

pub use aws_cli::AwsCliInventory;
pub use describe::{extract_records, DescribeCommand};
pub use json_directory::JsonDirectoryInventory;
pub use memoizing::MemoizingInventory;
pub use response_cache::{ResponseCache, DEFAULT_CACHE_DIR};
