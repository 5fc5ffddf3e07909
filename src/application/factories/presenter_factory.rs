use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::application::dto::MapArtifact;
use crate::ports::outbound::OutputPresenter;
use std::path::{Path, PathBuf};

/// Extension given to iterated artifacts
pub const ARTIFACT_EXTENSION: &str = "dot";

/// Presenter type enumeration for factory pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    File(PathBuf),
}

impl PresenterType {
    /// Destination for one artifact
    ///
    /// Named (iterated) artifacts always go to `<output_dir>/<name>.dot`;
    /// a single artifact goes to `output` or stdout.
    pub fn for_artifact(artifact: &MapArtifact, output: Option<&Path>, output_dir: &Path) -> Self {
        match (&artifact.name, output) {
            (Some(name), _) => {
                PresenterType::File(output_dir.join(format!("{}.{}", name, ARTIFACT_EXTENSION)))
            }
            (None, Some(path)) => PresenterType::File(path.to_path_buf()),
            (None, None) => PresenterType::Stdout,
        }
    }
}

/// Factory for creating output presenters
///
/// This factory encapsulates the creation logic for different presenter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct PresenterFactory;

impl PresenterFactory {
    /// Creates a presenter instance for the specified type
    ///
    /// # Examples
    /// ```
    /// use cloud_netmap::application::factories::{PresenterFactory, PresenterType};
    ///
    /// let presenter = PresenterFactory::create(PresenterType::Stdout);
    /// ```
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}
