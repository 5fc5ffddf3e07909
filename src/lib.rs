//! cloud-netmap - Graphviz diagrams of a cloud network inventory
//!
//! This library turns a provider inventory (VPCs, subnets, instances, security
//! groups, route tables, network ACLs, load balancers, databases, ...) into
//! Graphviz DOT documents, following hexagonal architecture and Domain-Driven
//! Design principles.
//!
//! Two views are available:
//! - **Topology**: every resource inside its network / subnet, optionally
//!   narrowed by a [`ScopeFilter`](network_mapping::domain::ScopeFilter)
//! - **Security**: the blast radius of one instance, following security group
//!   peer references until no new group is found
//!
//! # Architecture
//!
//! - **Domain Layer** (`network_mapping`): resource records, registry and renderers
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use cloud_netmap::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let source = JsonDirectoryInventory::new("inventory");
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Load the inventory
//! let registry = LoadInventoryUseCase::new(source, progress_reporter).execute()?;
//!
//! // Render
//! let use_case = GenerateMapUseCase::new(&registry, DotWriter::new);
//! let request = MapRequest::topology(ScopeFilter::for_network("vpc-0abc"), TopologyOptions::default());
//! let response = use_case.execute(&request)?;
//! println!("{}", response.artifacts[0].content);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod network_mapping;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::graphviz::DotWriter;
    pub use crate::adapters::outbound::inventory::{
        AwsCliInventory, JsonDirectoryInventory, MemoizingInventory, ResponseCache,
    };
    pub use crate::application::dto::{IterateBy, MapArtifact, MapRequest, MapResponse, MapView};
    pub use crate::application::use_cases::{
        FindRelevantResourcesUseCase, GenerateMapUseCase, LoadInventoryUseCase,
    };
    pub use crate::network_mapping::domain::{
        Resource, ResourceKind, ResourceRegistry, ScopeFilter,
    };
    pub use crate::network_mapping::services::{
        SecurityRenderer, SecurityReport, TopologyOptions, TopologyRenderer,
    };
    pub use crate::ports::outbound::{
        Attributes, GraphDocument, GraphSink, InventorySource, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::Result;
}
