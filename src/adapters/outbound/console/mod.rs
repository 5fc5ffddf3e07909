/// Console adapters for operator feedback on stderr
mod progress_reporter;

pub use progress_reporter::StderrProgressReporter;
