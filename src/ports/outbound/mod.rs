/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (cloud CLI, file system, console, etc.).
pub mod graph_sink;
pub mod inventory_source;
pub mod output_presenter;
pub mod progress_reporter;

pub use graph_sink::{Attributes, GraphDocument, GraphSink};
pub use inventory_source::InventorySource;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
