use crate::network_mapping::domain::{Resource, ResourceKind, ResourceRegistry};
use crate::ports::outbound::{InventorySource, ProgressReporter};
use crate::shared::error::NetmapError;
use crate::shared::Result;

/// LoadInventoryUseCase - Fetches every resource kind and builds the registry
///
/// # Type Parameters
/// * `S` - InventorySource implementation
/// * `PR` - ProgressReporter implementation
pub struct LoadInventoryUseCase<S, PR> {
    source: S,
    progress_reporter: PR,
}

impl<S, PR> LoadInventoryUseCase<S, PR>
where
    S: InventorySource,
    PR: ProgressReporter,
{
    pub fn new(source: S, progress_reporter: PR) -> Self {
        Self {
            source,
            progress_reporter,
        }
    }

    /// Fetches and decodes all kinds in [`ResourceKind::ALL`] order
    ///
    /// # Errors
    /// Fails on the first acquisition error or on a record that does not
    /// decode into its typed form. Duplicate identifiers are not errors; the
    /// first record wins and a warning is reported.
    pub fn execute(&self) -> Result<ResourceRegistry> {
        self.progress_reporter.report("📡 Fetching network inventory...");

        let total = ResourceKind::ALL.len();
        let mut registry = ResourceRegistry::new();
        let mut duplicates = 0usize;

        for (position, kind) in ResourceKind::ALL.iter().copied().enumerate() {
            self.progress_reporter
                .report_progress(position + 1, total, Some(kind.as_str()));

            let records = self.source.fetch(kind)?;
            tracing::debug!(kind = %kind, count = records.len(), "fetched records");

            for (index, value) in records.into_iter().enumerate() {
                let resource =
                    Resource::decode(kind, value).map_err(|e| NetmapError::RecordDecodeError {
                        kind: kind.to_string(),
                        index,
                        details: e.to_string(),
                    })?;
                if !registry.insert(resource) {
                    duplicates += 1;
                }
            }
        }

        if duplicates > 0 {
            self.progress_reporter.report_error(&format!(
                "{} duplicate resource identifier(s) ignored",
                duplicates
            ));
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Loaded {} resource(s)",
            registry.len()
        ));

        Ok(registry)
    }
}
