use crate::shared::Result;

/// OutputPresenter port for presenting a rendered artifact
///
/// This port abstracts the output destination (stdout, file, etc.)
/// where a finished graph document is written.
pub trait OutputPresenter {
    /// Presents one rendered graph document
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - File permissions prevent writing
    fn present(&self, content: &str) -> Result<()>;
}
