/// Renderers that turn a resource registry into graph primitives
pub mod label;
pub mod rule_table;
pub mod security_renderer;
pub mod topology_renderer;

#[cfg(test)]
pub(crate) mod recording_sink;
#[cfg(test)]
pub(crate) mod test_fixtures;

pub use rule_table::{PortRange, RuleTable, TableCell, TableRow};
pub use security_renderer::{SecurityRenderer, SecurityReport, SecurityViewState};
pub use topology_renderer::{TopologyContext, TopologyOptions, TopologyRenderer};

use crate::network_mapping::domain::ResourceRegistry;
use crate::ports::outbound::{Attributes, GraphSink};

/// Writes `from -> to` when `to` resolves in the registry. Dangling
/// references are dropped.
pub(crate) fn connect_present(
    sink: &mut dyn GraphSink,
    registry: &ResourceRegistry,
    from: &str,
    to: &str,
) {
    if registry.contains(to) {
        sink.write_edge(from, to, &Attributes::new());
    } else {
        tracing::debug!(from, to, "skipping edge to unknown resource");
    }
}
