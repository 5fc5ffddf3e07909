/// Graphviz adapters
mod dot_writer;

pub use dot_writer::DotWriter;
