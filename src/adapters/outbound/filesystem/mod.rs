/// Filesystem adapters for writing rendered graphs
mod file_writer;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
