use crate::network_mapping::domain::ResourceKind;
use crate::shared::Result;

/// InventorySource port for acquiring raw resource records
///
/// Returns the provider's JSON records for one resource kind, already
/// unwrapped from the response envelope (`Vpcs`, `Reservations[].Instances`, ...).
/// Decoding into typed records happens in the application layer.
///
/// # Errors
/// Returns an error if:
/// - The underlying command or file cannot be run / read
/// - The response is not valid JSON or lacks the expected list
pub trait InventorySource {
    fn fetch(&self, kind: ResourceKind) -> Result<Vec<serde_json::Value>>;
}

impl<S: InventorySource + ?Sized> InventorySource for Box<S> {
    fn fetch(&self, kind: ResourceKind) -> Result<Vec<serde_json::Value>> {
        (**self).fetch(kind)
    }
}
