use crate::network_mapping::domain::{ResourceKind, ScopeFilter};
use crate::network_mapping::services::TopologyOptions;

/// Which renderer drives a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapView {
    Topology,
    /// Blast radius of one instance
    Security { instance_id: String },
}

/// Produce one topology artifact per network or per subnet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterateBy {
    Network,
    Subnet,
}

impl IterateBy {
    pub fn kind(self) -> ResourceKind {
        match self {
            IterateBy::Network => ResourceKind::Network,
            IterateBy::Subnet => ResourceKind::Subnet,
        }
    }
}

/// MapRequest - Internal request DTO for the map generation use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapRequest {
    pub scope: ScopeFilter,
    pub view: MapView,
    pub iterate: Option<IterateBy>,
    pub options: TopologyOptions,
}

impl MapRequest {
    pub fn topology(scope: ScopeFilter, options: TopologyOptions) -> Self {
        Self {
            scope,
            view: MapView::Topology,
            iterate: None,
            options,
        }
    }

    pub fn security(instance_id: impl Into<String>) -> Self {
        Self {
            scope: ScopeFilter::all(),
            view: MapView::Security {
                instance_id: instance_id.into(),
            },
            iterate: None,
            options: TopologyOptions::default(),
        }
    }

    pub fn iterate_by(mut self, iterate: Option<IterateBy>) -> Self {
        self.iterate = iterate;
        self
    }
}
