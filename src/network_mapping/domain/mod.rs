pub mod cidr;
pub mod records;
pub mod registry;
pub mod resource;
pub mod scope;
pub mod tags;

pub use cidr::{CidrBlock, CidrError};
pub use registry::ResourceRegistry;
pub use resource::{Resource, ResourceKind};
pub use scope::ScopeFilter;
pub use tags::Tags;
